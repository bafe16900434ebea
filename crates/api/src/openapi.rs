//! Machine-readable API description (OpenAPI 3.0)
//!
//! Built from the route table in [`crate::routes`] and schemas derived from
//! the Rust types, so the document cannot drift from what the router serves.

use crud_utils::AppConfig;
use schemars::gen::{SchemaGenerator, SchemaSettings};
use serde_json::{json, Map, Value};

use crate::handlers::Message;
use crate::resource::Resource;
use crate::routes::{collection_path, Operation, OPENAPI_PATH};
use crud_core::{Item, User};

/// Build the full document
pub fn document(config: &AppConfig) -> Value {
    let mut gen = SchemaSettings::openapi3().into_generator();
    let message = schema_ref::<Message>(&mut gen);

    let mut paths = Map::new();
    resource_paths::<User>(&mut gen, &message, &mut paths);
    resource_paths::<Item>(&mut gen, &message, &mut paths);
    paths.insert(
        "/health".to_string(),
        json!({
            "get": {
                "summary": "Health check",
                "operationId": "healthCheck",
                "responses": { "200": { "description": "Service is up" } }
            }
        }),
    );
    paths.insert(
        OPENAPI_PATH.to_string(),
        json!({
            "get": {
                "summary": "This document",
                "operationId": "openapi",
                "responses": { "200": { "description": "OpenAPI document" } }
            }
        }),
    );

    let schemas = serde_json::to_value(gen.take_definitions()).unwrap_or_default();

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": config.app_name,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "CRUD API for users and items"
        },
        "paths": paths,
        "components": { "schemas": schemas }
    })
}

fn schema_ref<T: schemars::JsonSchema>(gen: &mut SchemaGenerator) -> Value {
    serde_json::to_value(gen.subschema_for::<T>()).unwrap_or_default()
}

fn resource_paths<R: Resource>(
    gen: &mut SchemaGenerator,
    message: &Value,
    paths: &mut Map<String, Value>,
) {
    let entity = schema_ref::<R>(gen);
    let draft = schema_ref::<R::Draft>(gen);

    for op in Operation::ALL {
        let path = if op.targets_member() {
            format!("{}/{{id}}", collection_path::<R>())
        } else {
            collection_path::<R>()
        };
        let method = op.method().as_str().to_lowercase();
        let operation = describe::<R>(op, &entity, &draft, message);

        let entry = paths.entry(path).or_insert_with(|| json!({}));
        if let Value::Object(methods) = entry {
            methods.insert(method, operation);
        }
    }
}

fn json_content(schema: &Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn describe<R: Resource>(op: Operation, entity: &Value, draft: &Value, message: &Value) -> Value {
    let kind = R::KIND;
    let not_found = json!({
        "description": format!("{kind} not found"),
        "content": json_content(message)
    });
    let missing = json!({
        "description": "Missing required field",
        "content": json_content(message)
    });
    let success_code = op.success_status().as_u16().to_string();

    let (summary, success, body) = match op {
        Operation::List => (
            format!("List all {}", R::COLLECTION),
            json!({
                "description": format!("All {}", R::COLLECTION),
                "content": json_content(&json!({ "type": "array", "items": entity }))
            }),
            None,
        ),
        Operation::Get => (
            format!("Get a {} by id", kind.to_lowercase()),
            json!({ "description": kind, "content": json_content(entity) }),
            None,
        ),
        Operation::Create => (
            format!("Create a {}", kind.to_lowercase()),
            json!({ "description": format!("{kind} created"), "content": json_content(entity) }),
            Some(draft),
        ),
        Operation::Update => (
            format!("Update a {}", kind.to_lowercase()),
            json!({ "description": format!("{kind} updated"), "content": json_content(entity) }),
            Some(draft),
        ),
        Operation::Delete => (
            format!("Delete a {}", kind.to_lowercase()),
            json!({ "description": format!("{kind} deleted"), "content": json_content(message) }),
            None,
        ),
    };

    let mut responses = Map::new();
    responses.insert(success_code, success);
    if matches!(op, Operation::Create | Operation::Update) {
        responses.insert("400".to_string(), missing);
    }
    if op.targets_member() {
        responses.insert("404".to_string(), not_found);
    }

    let mut operation = json!({
        "tags": [R::COLLECTION],
        "summary": summary,
        "operationId": format!("{}{}", format!("{op:?}").to_lowercase(), kind),
        "responses": responses
    });
    if op.targets_member() {
        operation["parameters"] = json!([{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer", "format": "uint64" }
        }]);
    }
    if let Some(schema) = body {
        operation["requestBody"] = json!({ "required": true, "content": json_content(schema) });
    }
    operation
}
