// WebAssembly bindings for the browser shell
use crate::config::Config;
use crate::convert::{Category, ConversionTable};
use crate::expr;
use crate::history::{EntryKind, History};
use crate::tax;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct GstCalcWasm {
    config: Config,
    table: ConversionTable,
}

impl Default for GstCalcWasm {
    fn default() -> Self {
        Self {
            config: Config::empty(),
            table: ConversionTable::default(),
        }
    }
}

#[wasm_bindgen]
impl GstCalcWasm {
    /// Create the core, optionally from TOML configuration text
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<GstCalcWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };
        let table = config
            .conversion_table()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self { config, table })
    }

    /// Evaluate a display string
    /// Returns JSON: {"value": "..."} or {"error": true}
    #[wasm_bindgen]
    pub fn evaluate(&self, display: &str) -> Result<String, JsValue> {
        serde_json::to_string(&expr::evaluate(display))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Preview of a partially typed expression ("" = no preview)
    #[wasm_bindgen]
    pub fn preview(&self, display: &str) -> String {
        expr::preview(display)
    }

    /// Returns JSON: {"base", "gstAmount", "cgst", "sgst", "total"}
    #[wasm_bindgen]
    pub fn compute_gst(&self, amount: f64, rate: f64, mode: &str) -> Result<String, JsValue> {
        let mode: tax::GstMode = mode.parse().map_err(|e: String| JsValue::from_str(&e))?;
        let gst = tax::compute_gst(amount, rate, mode)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&gst)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize GST: {}", e)))
    }

    #[wasm_bindgen]
    pub fn convert(
        &self,
        value: f64,
        category: &str,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<f64, JsValue> {
        let category: Category = category
            .parse()
            .map_err(|e: crate::convert::ConvertError| JsValue::from_str(&e.to_string()))?;

        self.table
            .convert(value, category, from_unit, to_unit)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns JSON array of category names
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        let names: Vec<&str> = self.table.categories().map(|c| c.as_str()).collect();
        serde_json::to_string(&names)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize categories: {}", e)))
    }

    /// Returns JSON: {"base": "m", "units": [{"code", "label", "factor"}, ...]}
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<String, JsValue> {
        let category: Category = category
            .parse()
            .map_err(|e: crate::convert::ConvertError| JsValue::from_str(&e.to_string()))?;
        let units = self
            .table
            .get(category)
            .ok_or_else(|| JsValue::from_str(&format!("Category '{}' not loaded", category)))?;

        serde_json::to_string(units)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    /// Returns JSON: {"default_rate": 18.0, "quick_rates": [...]}
    #[wasm_bindgen]
    pub fn gst_settings(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.config.gst)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize settings: {}", e)))
    }

    #[wasm_bindgen]
    pub fn format_currency(&self, amount: f64) -> String {
        tax::format_inr(amount)
    }

    /// Append a committed result to a persisted history array
    /// kind: "CALC" | "GST" | "GST_QUICK"
    /// Returns the updated JSON array (newest first, capped)
    #[wasm_bindgen]
    pub fn record_history(
        &self,
        history_json: &str,
        kind: &str,
        expression: &str,
        result: &str,
    ) -> Result<String, JsValue> {
        let capacity = self.config.history.capacity;
        let mut history = if history_json.trim().is_empty() {
            History::with_capacity(capacity)
        } else {
            History::from_json(history_json, capacity)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse history: {}", e)))?
        };

        let kind: EntryKind = serde_json::from_value(serde_json::Value::String(kind.to_string()))
            .map_err(|_| JsValue::from_str(&format!("Unknown history kind '{}'", kind)))?;
        history.record(kind, expression, result);

        history
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize history: {}", e)))
    }
}
