use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be absent or explicitly `null` into its
/// default value. The dataset mixes both forms freely (`"content": null`
/// alongside records with no `content` key at all), and downstream code
/// treats them identically as empty.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
