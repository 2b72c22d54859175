//! WebAssembly bindings for huntopt
//!
//! JavaScript-friendly wrappers around the creature database and codex.
//! Structured results cross the boundary as JSON strings.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::codex::{
    format_cost, CodexBook as RustCodexBook, CodexLocation, RankInput,
};
use crate::db::MobDatabase as RustMobDatabase;
use crate::filter::FilterCriteria;

fn js_err(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

/// Filter form values as sent by the page
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FilterForm {
    mob_name: String,
    location: String,
    mob_type: String,
    mob_damage: String,
    mob_combat: String,
    min_hp: Option<u32>,
    max_hp: Option<u32>,
    show_all_mobs: bool,
    use_hp_range: bool,
    exclusive_damage_type: bool,
}

impl FilterForm {
    fn into_criteria(self) -> crate::Result<FilterCriteria> {
        let builder = FilterCriteria::builder()
            .name(self.mob_name)
            .location(self.location)
            .category(self.mob_type)
            .damage(&self.mob_damage)?
            .exclusive(self.exclusive_damage_type)
            .combat(self.mob_combat)
            .show_all(self.show_all_mobs);
        let builder = if self.use_hp_range {
            builder.hp_range(self.min_hp, self.max_hp)
        } else {
            builder.hp_exact(self.min_hp)
        };
        Ok(builder.build())
    }
}

/// JavaScript-friendly creature database
#[wasm_bindgen]
pub struct MobDatabase {
    inner: RustMobDatabase,
}

#[wasm_bindgen]
impl MobDatabase {
    /// Build from the creature and maturity CSV texts
    #[wasm_bindgen(constructor)]
    pub fn new(mobs_csv: &str, levels_csv: &str) -> Result<MobDatabase, JsValue> {
        let inner = RustMobDatabase::from_csv_readers(mobs_csv.as_bytes(), levels_csv.as_bytes())
            .map_err(|e| js_err("Load failed", e))?;
        Ok(MobDatabase { inner })
    }

    /// Build from a hosted API response body
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(body: &str) -> Result<MobDatabase, JsValue> {
        let inner = RustMobDatabase::from_json_str(body).map_err(|e| js_err("Load failed", e))?;
        Ok(MobDatabase { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Apply filter form values (JSON) and return matching records (JSON)
    #[wasm_bindgen(js_name = filter)]
    pub fn filter(&self, form_json: &str) -> Result<String, JsValue> {
        let form: FilterForm =
            serde_json::from_str(form_json).map_err(|e| js_err("Invalid filters", e))?;
        let criteria = form.into_criteria().map_err(|e| js_err("Invalid filters", e))?;
        serde_json::to_string(&self.inner.filter(&criteria))
            .map_err(|e| js_err("Serialize failed", e))
    }

    /// Selector options (JSON object of string arrays)
    #[wasm_bindgen(js_name = options)]
    pub fn options(&self) -> Result<String, JsValue> {
        let catalog = self.inner.catalog();
        let options = serde_json::json!({
            "locations": catalog.location_options(),
            "mobTypes": catalog.category_options(),
            "damageTypes": catalog.damage_options(),
            "combatTypes": catalog.combat_options(),
        });
        serde_json::to_string(&options).map_err(|e| js_err("Serialize failed", e))
    }
}

/// JavaScript-friendly codex book
#[wasm_bindgen]
pub struct CodexBook {
    inner: RustCodexBook,
}

#[wasm_bindgen]
impl CodexBook {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CodexBook {
        CodexBook {
            inner: RustCodexBook::new(),
        }
    }

    /// Add one location table from its CSV text
    #[wasm_bindgen(js_name = addLocation)]
    pub fn add_location(&mut self, location: &str, csv: &str) -> Result<(), JsValue> {
        let location = CodexLocation::from_reader(location, csv.as_bytes())
            .map_err(|e| js_err("Load failed", e))?;
        self.inner.insert(location);
        Ok(())
    }

    /// Every location with its creatures (JSON)
    #[wasm_bindgen(js_name = locations)]
    pub fn locations(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.locations()).map_err(|e| js_err("Serialize failed", e))
    }

    /// Cost to the next meta rank, formatted with two decimals
    #[wasm_bindgen(js_name = costToNextMeta)]
    pub fn cost_to_next_meta(&self, creature: &str, input: &str) -> Result<String, JsValue> {
        let (_, creature) = self
            .inner
            .find(creature)
            .map_err(|e| js_err("Lookup failed", e))?;
        Ok(format_cost(RankInput::parse(input).cost(creature)))
    }
}

impl Default for CodexBook {
    fn default() -> Self {
        Self::new()
    }
}
