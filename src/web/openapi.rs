//! API reference
//!
//! The OpenAPI description is a static declaration: handlers never read it
//! and it never inspects handlers. [`docs_page`] renders it in a browser.

use super::{DOCS_PATH, HEALTH_PATH, ITEMS_PATH, OPENAPI_PATH};
use axum::Json;
use axum::response::Html;
use serde_json::{Value as JsonValue, json};

pub const API_TITLE: &str = "Items API";

pub fn openapi_document() -> JsonValue {
    let item_path = format!("{ITEMS_PATH}/{{id}}");

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": API_TITLE,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "CRUD-style access to a flat collection of items stored as a JSON document."
        },
        "paths": {
            ITEMS_PATH: {
                "get": {
                    "operationId": "list_items",
                    "summary": "List every item in insertion order",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Item" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "operationId": "create_item",
                    "summary": "Create an item; the server assigns its id",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/NewItem" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Item" }
                                }
                            }
                        },
                        "422": { "description": "Body is not a JSON object" },
                        "500": { "description": "The collection could not be saved" }
                    }
                }
            },
            item_path: {
                "get": {
                    "operationId": "get_item",
                    "summary": "Fetch the first item with the given id",
                    "parameters": [
                        {
                            "name": "id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Item" }
                                }
                            }
                        },
                        "404": {
                            "description": "Not found",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Message" }
                                }
                            }
                        }
                    }
                }
            },
            HEALTH_PATH: {
                "get": {
                    "operationId": "health",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": { "status": { "type": "string" } },
                                        "required": ["status"]
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Item": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": ["string", "number"],
                            "description": "Server-generated identifier; hand-written records may carry numbers"
                        },
                        "name": { "description": "Free-form text, stored as submitted" }
                    },
                    "required": ["id"],
                    "additionalProperties": true
                },
                "NewItem": {
                    "type": "object",
                    "properties": {
                        "name": { "description": "Free-form text, stored as submitted" },
                        "id": { "description": "Ignored; replaced by a generated identifier" }
                    },
                    "additionalProperties": true
                },
                "Message": {
                    "type": "object",
                    "properties": { "message": { "type": "string" } },
                    "required": ["message"]
                }
            }
        }
    })
}

pub async fn openapi_json() -> Json<JsonValue> {
    Json(openapi_document())
}

pub async fn docs_page() -> Html<String> {
    Html(render_docs_page())
}

fn render_docs_page() -> String {
    format!(
        r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>{API_TITLE}</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
    <script>
      window.onload = () => {{
        window.ui = SwaggerUIBundle({{ url: "{OPENAPI_PATH}", dom_id: "#swagger-ui" }});
      }};
    </script>
    <noscript>The raw description is at <a href="{OPENAPI_PATH}">{OPENAPI_PATH}</a>; this page lives at {DOCS_PATH}.</noscript>
  </body>
</html>
"##
    )
}
