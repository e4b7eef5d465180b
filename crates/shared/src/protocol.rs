//! Wire shapes returned by the country-information endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::Country;

/// Field subset requested from the endpoint.
pub const COUNTRY_FIELDS: &str = "name,region,population,area,flags";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagsPayload {
    pub png: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryPayload {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub population: u64,
    // A handful of territories come back without an area, or with `null`.
    #[serde(default)]
    pub area: Option<f64>,
    pub flags: FlagsPayload,
}

impl From<CountryPayload> for Country {
    fn from(value: CountryPayload) -> Self {
        Self {
            name: value.name,
            region: value.region,
            population: value.population,
            area: value.area.unwrap_or(0.0),
            flag_url: value.flags.png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_entry_and_flattens_flag() {
        let raw = r#"{
            "flags": {"svg": "https://flagcdn.com/af.svg", "png": "https://flagcdn.com/w320/af.png"},
            "name": "Afghanistan",
            "region": "Asia",
            "population": 40218234,
            "area": 652230.0,
            "independent": false
        }"#;

        let payload: CountryPayload = serde_json::from_str(raw).expect("payload");
        let country = Country::from(payload);
        assert_eq!(country.name, "Afghanistan");
        assert_eq!(country.region, "Asia");
        assert_eq!(country.population, 40_218_234);
        assert_eq!(country.area, 652_230.0);
        assert_eq!(country.flag_url, "https://flagcdn.com/w320/af.png");
    }

    #[test]
    fn missing_area_decodes_as_zero() {
        let raw = r#"{"name": "Bouvet Island", "region": "Antarctic Ocean", "population": 0,
            "flags": {"png": "https://flagcdn.com/w320/bv.png"}}"#;

        let payload: CountryPayload = serde_json::from_str(raw).expect("payload");
        assert_eq!(payload.area, None);
        assert_eq!(Country::from(payload).area, 0.0);
    }

    #[test]
    fn null_area_does_not_reject_the_list() {
        let raw = r#"[
            {"name": "Heard Island", "region": "Antarctic", "population": 0, "area": null,
             "flags": {"png": "https://flagcdn.com/w320/hm.png"}},
            {"name": "Chad", "region": "Africa", "population": 16425859, "area": 1284000.0,
             "flags": {"png": "https://flagcdn.com/w320/td.png"}}
        ]"#;

        let payload: Vec<CountryPayload> = serde_json::from_str(raw).expect("payload");
        let countries: Vec<Country> = payload.into_iter().map(Country::from).collect();
        assert_eq!(countries[0].area, 0.0);
        assert_eq!(countries[1].area, 1_284_000.0);
    }

    #[test]
    fn missing_flags_is_rejected() {
        let raw = r#"{"name": "Nowhere", "region": "Asia", "population": 1, "area": 1.0}"#;
        assert!(serde_json::from_str::<CountryPayload>(raw).is_err());
    }
}
