//! Financial report blocks: a table with left (descriptive) and right (numeric)
//! column groups and an optional computed totals row.
//!
//! Serialized blocks come in three shapes. Deserialization detects the shape
//! structurally and always produces the canonical [`FinancialReportBlock`], so
//! nothing downstream ever sees a legacy layout.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use std::collections::BTreeMap;

pub const ACCOUNT_COLUMN_ID: &str = "accountNumber";
pub const LABEL_COLUMN_ID: &str = "label";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialColumn {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub align: ColumnAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRow {
    pub id: String,
    #[serde(default, deserialize_with = "cell_map")]
    pub values: BTreeMap<String, String>,
}

impl FinancialRow {
    pub fn value(&self, column_id: &str) -> &str {
        self.values.get(column_id).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReportBlock {
    pub left_columns: Vec<FinancialColumn>,
    pub right_columns: Vec<FinancialColumn>,
    pub rows: Vec<FinancialRow>,
    pub show_totals: bool,
}

impl FinancialReportBlock {
    /// Decodes (and migrates) a block from untrusted serialized content.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// All columns in display order: left group, then right group.
    pub fn columns(&self) -> impl Iterator<Item = &FinancialColumn> {
        self.left_columns.iter().chain(self.right_columns.iter())
    }

    /// Formatted sums of every right column, keyed by column id.
    ///
    /// Cells that do not parse as numbers are ignored; a column without any
    /// numeric cell totals to `0`.
    pub fn totals(&self) -> BTreeMap<String, String> {
        self.right_columns
            .iter()
            .map(|col| {
                let mut sum = 0.0f64;
                let mut fractional = false;
                for row in &self.rows {
                    if let Some(parsed) = parse_amount(row.value(&col.id)) {
                        sum += parsed.value;
                        fractional |= parsed.fractional;
                    }
                }
                (col.id.clone(), format_amount(sum, fractional))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedAmount {
    pub value: f64,
    pub fractional: bool,
}

/// Parses an accounting amount such as `1,234.50`, `-12`, `$ 40` or `(500)`.
/// Blank cells count as zero.
pub fn parse_amount(raw: &str) -> Option<ParsedAmount> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(ParsedAmount { value: 0.0, fractional: false });
    }
    let (negative, body) = match trimmed.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => (true, inner),
        None => (false, trimmed),
    };
    let cleaned: String = body
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '$' | '€' | '£'))
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(ParsedAmount {
        value: if negative { -value } else { value },
        fractional: cleaned.contains('.'),
    })
}

/// Formats an amount with thousands separators; negatives use parentheses.
pub fn format_amount(value: f64, fractional: bool) -> String {
    let magnitude = if fractional {
        format!("{:.2}", value.abs())
    } else {
        format!("{:.0}", value.abs())
    };
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (magnitude, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(&frac);
    }
    if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("({})", grouped)
    } else {
        grouped
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn cell_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, cell_text(v))).collect())
}

// --- Legacy decoding ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CanonicalDef {
    #[serde(default)]
    left_columns: Vec<FinancialColumn>,
    #[serde(default)]
    right_columns: Vec<FinancialColumn>,
    #[serde(default)]
    rows: Vec<FinancialRow>,
    #[serde(default)]
    show_totals: bool,
}

#[derive(Deserialize, Default)]
struct LegacyColumnDef {
    id: Option<String>,
    label: Option<String>,
    align: Option<ColumnAlign>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AccountColumnDef {
    Flag(bool),
    Column(LegacyColumnDef),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyRowDef {
    id: Option<String>,
    account_number: Option<Value>,
    label: Option<Value>,
    #[serde(default, deserialize_with = "cell_map")]
    values: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyDef {
    account_number_column: Option<AccountColumnDef>,
    #[serde(default)]
    columns: Vec<LegacyColumnDef>,
    #[serde(default)]
    rows: Vec<LegacyRowDef>,
    #[serde(default)]
    show_totals: bool,
}

impl<'de> Deserialize<'de> for FinancialReportBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let canonical = value.get("leftColumns").is_some() || value.get("rightColumns").is_some();
        if canonical {
            let c = CanonicalDef::deserialize(&value).map_err(de::Error::custom)?;
            return Ok(FinancialReportBlock {
                left_columns: c.left_columns,
                right_columns: c.right_columns,
                rows: c.rows,
                show_totals: c.show_totals,
            });
        }
        LegacyDef::deserialize(&value)
            .map(migrate_legacy)
            .map_err(|_| de::Error::custom("unrecognized financial report block shape"))
    }
}

fn migrate_legacy(legacy: LegacyDef) -> FinancialReportBlock {
    let explicit_account = match legacy.account_number_column {
        Some(AccountColumnDef::Column(def)) => Some(def),
        Some(AccountColumnDef::Flag(true)) => Some(LegacyColumnDef::default()),
        Some(AccountColumnDef::Flag(false)) | None => None,
    };
    let rows_have_accounts = legacy.rows.iter().any(|r| r.account_number.is_some());
    let rows_have_labels = legacy.rows.iter().any(|r| r.label.is_some());

    let account_column = match explicit_account {
        Some(def) => Some(FinancialColumn {
            id: def.id.unwrap_or_else(|| ACCOUNT_COLUMN_ID.to_string()),
            label: def.label.unwrap_or_else(|| "Account".to_string()),
            align: def.align.unwrap_or(ColumnAlign::Left),
        }),
        None if rows_have_accounts => Some(FinancialColumn {
            id: ACCOUNT_COLUMN_ID.to_string(),
            label: "Account".to_string(),
            align: ColumnAlign::Left,
        }),
        None => None,
    };

    let mut left_columns = Vec::new();
    if let Some(col) = &account_column {
        left_columns.push(col.clone());
    }
    if rows_have_labels {
        left_columns.push(FinancialColumn {
            id: LABEL_COLUMN_ID.to_string(),
            label: "Description".to_string(),
            align: ColumnAlign::Left,
        });
    }

    let right_columns = legacy
        .columns
        .into_iter()
        .enumerate()
        .map(|(i, def)| FinancialColumn {
            id: def.id.unwrap_or_else(|| format!("col-{}", i + 1)),
            label: def.label.unwrap_or_default(),
            align: def.align.unwrap_or(ColumnAlign::Right),
        })
        .collect();

    let rows = legacy
        .rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let mut values = row.values;
            if let (Some(col), Some(account)) = (&account_column, row.account_number) {
                values.entry(col.id.clone()).or_insert_with(|| cell_text(account));
            }
            if let Some(label) = row.label {
                values
                    .entry(LABEL_COLUMN_ID.to_string())
                    .or_insert_with(|| cell_text(label));
            }
            FinancialRow {
                id: row.id.unwrap_or_else(|| format!("row-{}", i + 1)),
                values,
            }
        })
        .collect();

    FinancialReportBlock {
        left_columns,
        right_columns,
        rows,
        show_totals: legacy.show_totals,
    }
}
