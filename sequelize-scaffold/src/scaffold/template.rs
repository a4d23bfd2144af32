//! Sequelize model template rendering
//!
//! Rendering is a pure function of the entity name and its field-set; writing
//! the result to disk is left to [`ModelGenerator`](super::generator::ModelGenerator).

use handlebars::Handlebars;
use serde_json::json;

use super::field_type::DataType;
use super::schema::FieldSet;
use crate::error::Result;

/// Template for a `sequelize-cli` style model module
pub const MODEL_TEMPLATE: &str = r"module.exports = (sequelize, DataTypes) => {
  const {{model_name}} = sequelize.define('{{model_name}}', {
{{#each fields}}
    {{name}}: { type: DataTypes.{{data_type}} }{{#unless @last}},{{/unless}}
{{/each}}
  });
  return {{model_name}};
};
";

const MODEL: &str = "model";

/// Renders model files from [`MODEL_TEMPLATE`]
pub struct ModelTemplate {
    handlebars: Handlebars<'static>,
}

impl ModelTemplate {
    /// Create a renderer with the model template registered
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in template fails to compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars.register_template_string(MODEL, MODEL_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    /// Render the model module for one entity
    ///
    /// Fields appear in field-set order, each typed through
    /// [`DataType::from_token`]. The output carries no leading or trailing
    /// blank lines.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, model_name: &str, fields: &FieldSet) -> Result<String> {
        let fields: Vec<_> = fields
            .iter()
            .map(|(name, token)| {
                json!({
                    "name": name,
                    "data_type": DataType::from_token(token.as_deref()).sequelize_type(),
                })
            })
            .collect();

        let context = json!({
            "model_name": model_name,
            "fields": fields,
        });

        let rendered = self.handlebars.render(MODEL, &context)?;
        Ok(rendered.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, Option<&str>)]) -> FieldSet {
        pairs
            .iter()
            .map(|(name, token)| ((*name).to_string(), token.map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_render_user_model() {
        let template = ModelTemplate::new().unwrap();
        let content = template
            .render("User", &fields(&[("name", Some("string")), ("age", Some("int"))]))
            .unwrap();

        assert!(content.starts_with("module.exports = (sequelize, DataTypes) => {"));
        assert!(content.contains("const User = sequelize.define('User', {"));
        assert!(content.contains("name: { type: DataTypes.STRING },"));
        assert!(content.contains("age: { type: DataTypes.INTEGER }"));
        assert!(!content.contains("INTEGER },"));
        assert!(content.contains("return User;"));
        assert!(content.ends_with("};"));
    }

    #[test]
    fn test_field_order_follows_field_set() {
        let template = ModelTemplate::new().unwrap();
        let field_set = fields(&[
            ("title", Some("string")),
            ("published", Some("boolean")),
            ("views", Some("int")),
        ]);
        let content = template.render("Post", &field_set).unwrap();

        let title = content.find("title:").unwrap();
        let published = content.find("published:").unwrap();
        let views = content.find("views:").unwrap();
        assert!(title < published && published < views);
        assert!(content.contains("published: { type: DataTypes.BOOLEAN },"));
    }

    #[test]
    fn test_unknown_and_missing_tokens_render_as_string() {
        let template = ModelTemplate::new().unwrap();
        let content = template
            .render("Note", &fields(&[("body", Some("text")), ("tag", None)]))
            .unwrap();

        assert!(content.contains("body: { type: DataTypes.STRING },"));
        assert!(content.contains("tag: { type: DataTypes.STRING }"));
    }

    #[test]
    fn test_entity_without_fields() {
        let template = ModelTemplate::new().unwrap();
        let content = template.render("Empty", &FieldSet::new()).unwrap();

        assert!(content.contains("const Empty = sequelize.define('Empty', {"));
        assert!(!content.contains("DataTypes."));
        assert!(content.contains("return Empty;"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let template = ModelTemplate::new().unwrap();
        let set = fields(&[("name", Some("string"))]);
        assert_eq!(
            template.render("User", &set).unwrap(),
            template.render("User", &set).unwrap()
        );
    }
}
