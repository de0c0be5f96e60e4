//! Prompt templating with simple `{{placeholder}}` substitution.
//!
//! Given a text `template` and an `inputs` object, replaces every `{{ key }}`
//! occurrence with the string form of `inputs[key]`.
use serde_json::Value;

use crate::catalog::Product;
use crate::error::{AppError, AppResult};

pub const COPY_SYSTEM_PROMPT: &str = "You are a concise ecommerce copywriter.";

pub const COPY_TEMPLATE: &str = "Write Pinterest metadata for a product Pin.\n\
Product: {{name}}. Color: {{color}}. Shape: {{shape}}. Scent: {{scent}}.\n\
Scene: {{scene}}. Return JSON keys: title, description, alt.";

pub const IMAGE_TEMPLATE: &str =
    "Photorealistic {{shape}} candle in {{color}} by {{brand}} in a {{scene}}.";

#[derive(Default)]
pub struct PromptConstructor;

impl PromptConstructor {
    pub fn new() -> Self {
        PromptConstructor
    }

    /// Construct a prompt by substituting placeholders inside `template`
    /// with corresponding values from `inputs`.
    pub fn construct_prompt(&self, template: &str, inputs: &Value) -> AppResult<String> {
        self.validate_inputs(inputs)?;
        self.replace_placeholders(template, inputs)
    }

    /// Inputs shared by the copy and image prompts.
    pub fn product_inputs(product: &Product, scene: &str, brand: &str) -> Value {
        serde_json::json!({
            "name": product.name,
            "color": product.color,
            "shape": product.shape,
            "scent": product.scent,
            "scene": scene,
            "brand": brand,
        })
    }

    fn validate_inputs(&self, inputs: &Value) -> AppResult<()> {
        if inputs.is_object() {
            Ok(())
        } else {
            Err(AppError::PromptConstruction("inputs must be a JSON object".to_string()))
        }
    }

    fn replace_placeholders(&self, template: &str, inputs: &Value) -> AppResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(AppError::PromptConstruction(format!(
                    "Unclosed placeholder in template: {}",
                    template
                )));
            };
            let key = after[..end].trim();
            match inputs.get(key) {
                Some(Value::String(s)) => out.push_str(s),
                Some(Value::Null) | None => {
                    return Err(AppError::PromptConstruction(format!(
                        "Missing input for placeholder: {}",
                        key
                    )))
                }
                Some(other) => out.push_str(&other.to_string()),
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
