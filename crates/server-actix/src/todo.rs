// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! An in-memory todo list API, annotated for discovery.

use std::sync::{Mutex, PoisonError};

use actix_web::{HttpResponse, web};
use descriptor::RouteAnnotation;
use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{ApiRoutes, ServerError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct NewTodo {
    pub text: String,
}

/// Todos keyed by id, in creation order.
#[derive(Default)]
pub struct TodoStore {
    todos: Mutex<IndexMap<String, Todo>>,
}

impl TodoStore {
    fn with_todos<T>(&self, f: impl FnOnce(&mut IndexMap<String, Todo>) -> T) -> T {
        let mut todos = self.todos.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut todos)
    }
}

pub fn register(routes: &mut ApiRoutes) -> Result<(), ServerError> {
    routes.route("/todo", Method::POST, create_todo)?.describe(
        RouteAnnotation::new("Create a new todo item")
            .with_request_schema(json!({
                "type": "object",
                "properties": { "text": { "type": "string" } },
                "required": ["text"]
            }))
            .with_response_schema(todo_schema())
            .with_example(r#"curl -X POST /todo -d '{"text":"buy milk"}'"#),
    );

    routes
        .route("/todo/{todo_id}", Method::GET, get_todo)?
        .describe(
            RouteAnnotation::new("Get a todo item by ID").with_response_schema(todo_schema()),
        );

    routes.route("/todos", Method::GET, list_todos)?.describe(
        RouteAnnotation::new("List all todo items").with_response_schema(json!({
            "type": "array",
            "items": todo_schema()
        })),
    );

    routes
        .route("/todo/{todo_id}/complete", Method::PUT, complete_todo)?
        .describe(
            RouteAnnotation::new("Mark a todo item as completed")
                .with_response_schema(success_schema()),
        );

    routes
        .route("/todo/{todo_id}", Method::DELETE, delete_todo)?
        .describe(
            RouteAnnotation::new("Delete a todo item").with_response_schema(success_schema()),
        );

    Ok(())
}

fn todo_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "text": { "type": "string" },
            "completed": { "type": "boolean" }
        }
    })
}

fn success_schema() -> Value {
    json!({
        "type": "object",
        "properties": { "success": { "type": "boolean" } }
    })
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "errors": [{ "message": "Todo not found" }] }))
}

async fn create_todo(store: web::Data<TodoStore>, new_todo: web::Json<NewTodo>) -> HttpResponse {
    let todo = Todo {
        id: uuid::Uuid::new_v4().to_string(),
        text: new_todo.into_inner().text,
        completed: false,
    };
    store.with_todos(|todos| todos.insert(todo.id.clone(), todo.clone()));
    tracing::debug!("Created todo {}", todo.id);

    HttpResponse::Ok().json(todo)
}

async fn get_todo(store: web::Data<TodoStore>, todo_id: web::Path<String>) -> HttpResponse {
    match store.with_todos(|todos| todos.get(todo_id.as_str()).cloned()) {
        Some(todo) => HttpResponse::Ok().json(todo),
        None => not_found(),
    }
}

async fn list_todos(store: web::Data<TodoStore>) -> HttpResponse {
    let todos: Vec<Todo> = store.with_todos(|todos| todos.values().cloned().collect());
    HttpResponse::Ok().json(todos)
}

async fn complete_todo(store: web::Data<TodoStore>, todo_id: web::Path<String>) -> HttpResponse {
    let found = store.with_todos(|todos| match todos.get_mut(todo_id.as_str()) {
        Some(todo) => {
            todo.completed = true;
            true
        }
        None => false,
    });

    if found {
        HttpResponse::Ok().json(json!({ "success": true }))
    } else {
        not_found()
    }
}

async fn delete_todo(store: web::Data<TodoStore>, todo_id: web::Path<String>) -> HttpResponse {
    match store.with_todos(|todos| todos.shift_remove(todo_id.as_str())) {
        Some(_) => HttpResponse::Ok().json(json!({ "success": true })),
        None => not_found(),
    }
}
