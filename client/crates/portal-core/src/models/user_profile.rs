use serde::{Deserialize, Deserializer, Serialize};

/// Member profile as returned by `GET /user`.
///
/// Only `id` is required. A null `name` reads as empty. The backend reports
/// the contributed amount as `monto_aportado`, sometimes as a number and
/// sometimes as a decimal string; text that is not an amount reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(
        rename = "monto_aportado",
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub contributed_amount: Option<f64>,
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celular: Option<String>,
}

impl UserProfile {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            role: None,
            contributed_amount: None,
            joined_at: None,
            dni: None,
            celular: None,
        }
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match Option::<RawAmount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawAmount::Number(amount)) => Ok(Some(amount)),
        Some(RawAmount::Text(text)) => Ok(parse_amount(&text)),
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `"45.40"`, `"1,500.00"`; commas are grouping only when a decimal point
/// follows them.
fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Ok(amount) = text.parse::<f64>() {
        return Some(amount);
    }

    match (text.rfind(','), text.rfind('.')) {
        (Some(comma), Some(point)) if comma < point => text.replace(',', "").parse().ok(),
        _ => None,
    }
}
