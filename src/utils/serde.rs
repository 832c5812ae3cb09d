use serde::{Deserialize, Deserializer};

/// Treats `""` the same as an absent field, so partial updates skip empty
/// values instead of failing validation on them.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}
