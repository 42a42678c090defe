//! Replay command - folds a JSON-Lines command log into a final collection.
//!
//! Replay is schema-agnostic: items stay raw JSON objects, and identity is
//! whatever sits under the configured key member (`--key`, `id` by default).
//! Unrecognized command kinds are skipped so that logs shared with other
//! parts of a state layer still replay cleanly.

use std::fs;
use std::io::Read;

use roster::{Collection, Command, CommandMeta, Keyed, ListConfig, ListReducer, Op};
use serde::Deserialize;
use serde_json::Value;

use crate::cli::ReplayArgs;

/// A JSON record with its identifying member pulled out at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    key: Value,
    body: Value,
}

impl Record {
    /// Wraps a JSON value, requiring the key member to be present.
    fn from_value(body: Value, key_member: &str) -> Result<Self, Box<dyn std::error::Error>> {
        match body.get(key_member) {
            Some(key) => Ok(Self {
                key: key.clone(),
                body,
            }),
            None => Err(format!("record is missing key member '{key_member}': {body}").into()),
        }
    }
}

impl Keyed for Record {
    type Key = Value;
    fn key(&self) -> Value {
        self.key.clone()
    }
}

// Records print as the raw JSON they were loaded from; the extracted key is
// a lookup convenience, not part of the data.
impl serde::Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.body.serialize(serializer)
    }
}

/// The wire shape producers emit; `kind` stays a string until decoded.
#[derive(Debug, Deserialize)]
struct RawCommand {
    kind: String,
    #[serde(default)]
    payload: Value,
    #[serde(default)]
    metadata: RawMeta,
    #[serde(default)]
    error: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMeta {
    #[serde(default)]
    list_name: Option<String>,
}

fn field<'a>(payload: &'a Value, name: &str) -> Result<&'a Value, Box<dyn std::error::Error>> {
    payload
        .get(name)
        .ok_or_else(|| format!("payload is missing '{name}': {payload}").into())
}

fn index_field(payload: &Value) -> Result<usize, Box<dyn std::error::Error>> {
    field(payload, "index")?
        .as_u64()
        .map(|index| index as usize)
        .ok_or_else(|| format!("payload 'index' is not a non-negative integer: {payload}").into())
}

fn item_field(payload: &Value, key_member: &str) -> Result<Record, Box<dyn std::error::Error>> {
    Record::from_value(field(payload, "item")?.clone(), key_member)
}

/// Parses a JSON array into a collection of records.
fn records(
    payload: Value,
    key_member: &str,
) -> Result<Collection<Record>, Box<dyn std::error::Error>> {
    match payload {
        Value::Array(values) => values
            .into_iter()
            .map(|value| Record::from_value(value, key_member))
            .collect(),
        other => Err(format!("expected a JSON array of records, got: {other}").into()),
    }
}

/// Decodes one wire command.
///
/// Unrecognized kinds return `None`: a log may carry commands for other
/// parts of the state layer, and those must leave list state untouched.
fn decode(
    raw: RawCommand,
    key_member: &str,
) -> Result<Option<Command<Record>>, Box<dyn std::error::Error>> {
    let RawCommand {
        kind,
        payload,
        metadata,
        error,
    } = raw;

    let op = match kind.as_str() {
        "INSERT_ITEM" => Op::InsertItem {
            item: item_field(&payload, key_member)?,
            index: index_field(&payload)?,
        },
        "REMOVE_ITEM" => Op::RemoveItem {
            index: index_field(&payload)?,
        },
        "REMOVE_ITEM_BY_KEY" => Op::RemoveItemByKey {
            key: field(&payload, "key")?.clone(),
        },
        "UPDATE_ITEM" => Op::UpdateItem {
            item: item_field(&payload, key_member)?,
            index: index_field(&payload)?,
        },
        "UPDATE_ITEM_BY_KEY" => Op::UpdateItemByKey {
            item: item_field(&payload, key_member)?,
        },
        "UPDATE_ITEMS_BY_KEY" => {
            let items = field(&payload, "items")?
                .as_array()
                .ok_or_else(|| format!("payload 'items' is not an array: {payload}"))?
                .iter()
                .map(|value| Record::from_value(value.clone(), key_member))
                .collect::<Result<Vec<_>, _>>()?;
            Op::UpdateItemsByKey { items }
        }
        "RESET_LIST" => Op::ResetList,
        "SET_LIST" => Op::SetList(records(payload, key_member)?),
        other => {
            tracing::debug!(kind = other, "unrecognized command kind; skipping");
            return Ok(None);
        }
    };

    Ok(Some(Command {
        op,
        metadata: CommandMeta {
            list_name: metadata.list_name,
        },
        error,
    }))
}

/// Folds a command log (one JSON object per line) into the final state.
///
/// Returns the final collection and how many commands were applied. Blank
/// lines and unrecognized kinds are skipped; error-flagged commands apply
/// as identity transitions.
fn replay_log(
    reducer: &ListReducer<Record>,
    log: &str,
    key_member: &str,
) -> Result<(Collection<Record>, usize), Box<dyn std::error::Error>> {
    let mut state = reducer.initial_state();
    let mut applied = 0;

    for (number, line) in log.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let raw: RawCommand = serde_json::from_str(line)
            .map_err(|err| format!("line {}: invalid command: {err}", number + 1))?;
        // Error-flagged commands are identity transitions before their kind
        // or payload is considered; a failure notification's payload carries
        // the failure, not an item.
        if raw.error {
            tracing::debug!(kind = %raw.kind, "error-flagged command; state unchanged");
            applied += 1;
            continue;
        }
        let kind = raw.kind.clone();
        match decode(raw, key_member) {
            Ok(Some(command)) => {
                state = reducer.reduce(&state, &command);
                applied += 1;
            }
            Ok(None) => {}
            Err(err) => return Err(format!("line {}: {kind}: {err}", number + 1).into()),
        }
    }

    Ok((state, applied))
}

fn read_log(input: &str) -> Result<String, Box<dyn std::error::Error>> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    fs::read_to_string(input).map_err(|err| format!("failed to read {input}: {err}").into())
}

/// Run the replay command
pub fn run(args: &ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let initial = match &args.initial {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
            records(serde_json::from_str(&text)?, &args.key)?
        }
        None => Collection::new(),
    };

    let reducer = ListReducer::new(ListConfig::new(&args.list).with_initial(initial));
    let log = read_log(&args.input)?;
    let (state, applied) = replay_log(&reducer, &log, &args.key)?;

    tracing::info!(
        list = %args.list,
        applied,
        len = state.len(),
        "replay complete"
    );

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    println!("{rendered}");

    Ok(())
}
