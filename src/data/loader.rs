use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Character, CharacterRoster, Comic, Price, Thumbnail};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a catalog snapshot from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – upstream API envelope or a plain top-level record array
/// * `.csv`  – one row per comic, `characters` column holds
///   semicolon-separated names
pub fn load_file(path: &Path) -> Result<Vec<Comic>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Upstream rejection carried inside a well-formed envelope (`code != 200`).
#[derive(Debug, Error)]
#[error("upstream returned code {code}: {status}")]
pub struct ApiError {
    pub code: i64,
    pub status: String,
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

// Wire shape of one record. Only `id` and `title` are required; everything
// else defaults so partial exports stay loadable.
#[derive(Debug, Deserialize)]
struct ComicRow {
    id: u64,
    title: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    characters: RosterRow,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "issueNumber")]
    issue_number: f64,
    #[serde(default, rename = "pageCount")]
    page_count: u32,
    #[serde(default)]
    prices: Vec<PriceRow>,
    #[serde(default)]
    thumbnail: Option<ThumbnailRow>,
}

#[derive(Debug, Default, Deserialize)]
struct RosterRow {
    #[serde(default)]
    available: u32,
    #[serde(default)]
    items: Vec<CharacterRow>,
}

#[derive(Debug, Deserialize)]
struct CharacterRow {
    #[serde(default)]
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    price: f64,
}

#[derive(Debug, Deserialize)]
struct ThumbnailRow {
    path: String,
    extension: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    status: String,
    // Rejected envelopes come without a data block.
    #[serde(default)]
    data: EnvelopeData,
}

#[derive(Debug, Default, Deserialize)]
struct EnvelopeData {
    #[serde(default)]
    results: Vec<ComicRow>,
}

impl ComicRow {
    fn into_comic(self) -> Comic {
        Comic {
            id: self.id,
            title: self.title,
            kind: self.kind,
            characters: CharacterRoster {
                available: self.characters.available,
                items: self
                    .characters
                    .items
                    .into_iter()
                    .map(|c| Character {
                        id: c.id,
                        name: c.name,
                    })
                    .collect(),
            },
            description: self.description,
            issue_number: self.issue_number,
            page_count: self.page_count,
            prices: self
                .prices
                .into_iter()
                .map(|p| Price {
                    kind: p.kind,
                    amount: p.price,
                })
                .collect(),
            thumbnail: self.thumbnail.map(|t| Thumbnail {
                path: t.path,
                extension: t.extension,
            }),
        }
    }
}

fn load_json(path: &Path) -> Result<Vec<Comic>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Parse a JSON snapshot.
///
/// Two layouts are accepted: the upstream envelope
/// `{"code":200,"status":"Ok","data":{"results":[...]}}` or a plain
/// top-level array of records. A non-200 envelope `code` becomes an
/// [`ApiError`] carrying the upstream status text.
pub fn parse_json(text: &str) -> Result<Vec<Comic>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let rows: Vec<ComicRow> = if root.is_array() {
        serde_json::from_value(root).context("parsing record array")?
    } else {
        let envelope: Envelope =
            serde_json::from_value(root).context("parsing API envelope")?;
        if envelope.code != 200 {
            return Err(ApiError {
                code: envelope.code,
                status: envelope.status,
            }
            .into());
        }
        envelope.data.results
    };

    Ok(rows.into_iter().map(ComicRow::into_comic).collect())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. Required columns are `id`,
/// `title` and `characters_available`; `type` and `characters` are optional.
/// The `characters` column packs listed names as semicolon-separated text:
///   `"Spider-Man;Iron Man"`
/// The flat format carries names only, so character ids load as 0.
fn load_csv(path: &Path) -> Result<Vec<Comic>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    parse_csv(reader)
}

fn parse_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Comic>> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let id_idx = headers
        .iter()
        .position(|h| h == "id")
        .context("CSV missing 'id' column")?;
    let title_idx = headers
        .iter()
        .position(|h| h == "title")
        .context("CSV missing 'title' column")?;
    let available_idx = headers
        .iter()
        .position(|h| h == "characters_available")
        .context("CSV missing 'characters_available' column")?;
    let kind_idx = headers.iter().position(|h| h == "type");
    let names_idx = headers.iter().position(|h| h == "characters");

    let mut comics = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let id: u64 = record
            .get(id_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("CSV row {row_no}: 'id' is not an integer"))?;
        let title = record.get(title_idx).unwrap_or("").to_string();
        let available: u32 = record
            .get(available_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| {
                format!("CSV row {row_no}: 'characters_available' is not a non-negative integer")
            })?;
        let kind = kind_idx
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .to_string();
        let items = names_idx
            .and_then(|i| record.get(i))
            .map(parse_character_names)
            .unwrap_or_default();

        comics.push(Comic {
            id,
            title,
            kind,
            characters: CharacterRoster { available, items },
            description: None,
            issue_number: 0.0,
            page_count: 0,
            prices: Vec::new(),
            thumbnail: None,
        });
    }

    Ok(comics)
}

fn parse_character_names(s: &str) -> Vec<Character> {
    s.split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Character {
            id: 0,
            name: name.to_string(),
        })
        .collect()
}
