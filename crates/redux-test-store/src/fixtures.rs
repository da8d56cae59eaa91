//! Todo list reducer and action creators shared by the tests

use redux_core::{reducer, Dispatchable, Reducer, StoreApi};
use serde::Serialize;

pub type Todos = Vec<String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    AddTodo { text: String },
    RemoveTodo { text: String },
    /// Not handled by the reducer
    Ping,
}

pub fn todos() -> Reducer<Todos, TodoAction> {
    reducer(|mut state: Todos, action: &TodoAction| {
        match action {
            TodoAction::AddTodo { text } => state.push(text.clone()),
            TodoAction::RemoveTodo { text } => state.retain(|todo| todo != text),
            _ => {}
        }
        state
    })
}

pub fn add_todo(text: &str) -> TodoAction {
    TodoAction::AddTodo {
        text: text.to_string(),
    }
}

pub fn remove_todo_raw(text: &str) -> TodoAction {
    TodoAction::RemoveTodo {
        text: text.to_string(),
    }
}

/// Removes `text` only if it is in the list; otherwise dispatches nothing
pub fn remove_todo(text: &str) -> Dispatchable<Todos, TodoAction> {
    let text = text.to_string();
    Dispatchable::thunk(move |api: &StoreApi<Todos, TodoAction>| {
        if api.state().contains(&text) {
            api.dispatch(remove_todo_raw(&text))
        } else {
            Ok(None)
        }
    })
}
