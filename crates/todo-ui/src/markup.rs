//! HTML rendering of the todo list.
//!
//! The document is a fixed template. Its contract with the embedded
//! script (and with anyone testing the output) is:
//!
//! - `#newTodo` is the creation input and `#addTodo` its button;
//! - `#todoList` holds one `.todo-item` per todo, with `id="todo-<id>"`
//!   and `data-id="<id>"`;
//! - elements with `data-action="toggle|edit|delete"` trigger the
//!   matching behaviour for their row;
//! - every tool call is posted to `window.parent` as
//!   `{ type: "tool", payload: { toolName, params } }`.
//!
//! Editing is handled in the page: Enter or Save posts `todo_edit`
//! (or `todo_delete` when the text was cleared), Escape or Cancel puts
//! the original row back without any tool call.

use todo_types::Todo;

/// Id of the creation input.
pub const NEW_TODO_INPUT_ID: &str = "newTodo";
/// Id of the creation button.
pub const ADD_BUTTON_ID: &str = "addTodo";
/// Id of the list container.
pub const TODO_LIST_ID: &str = "todoList";

const STYLE: &str = r#"
      body { font-family: Arial, sans-serif; background: #f9f9f9; margin: 0; padding: 0; }
      .container { max-width: 500px; margin: auto; padding: 20px; }
      .todo-form, .todo-item { display: flex; gap: 10px; margin-bottom: 10px; align-items: center; }
      .todo-input { flex: 1; padding: 6px 8px; border: 1px solid #ccc; border-radius: 4px; }
      .todo-btn { flex-shrink: 0; padding: 6px 10px; border: 1px solid #ccc; border-radius: 4px; cursor: pointer; background: white; }
      .todo-btn:hover { border-color: #888; }
      .todo-text { flex: 1; line-height: 32px; cursor: pointer; word-break: break-word; overflow-wrap: break-word; }
      .todo-text.done { text-decoration: line-through; color: #888; }
"#;

const SCRIPT: &str = r#"
      (function () {
        function postTool(toolName, params) {
          window.parent.postMessage({ type: "tool", payload: { toolName: toolName, params: params } }, "*");
        }

        function button(label, onClick) {
          var btn = document.createElement("button");
          btn.className = "todo-btn";
          btn.textContent = label;
          btn.addEventListener("click", onClick);
          return btn;
        }

        function addTodo() {
          var input = document.getElementById("newTodo");
          var text = input.value.trim();
          if (!text) return;
          postTool("todo_create", { text: text });
          input.value = "";
        }

        function editTodo(item) {
          var id = item.dataset.id;
          var original = Array.prototype.slice.call(item.childNodes);
          var input = document.createElement("input");
          input.className = "todo-input";
          input.value = item.querySelector(".todo-text").textContent;

          function save() {
            var text = input.value.trim();
            if (text === "") {
              postTool("todo_delete", { id: id });
            } else {
              postTool("todo_edit", { id: id, text: text });
            }
          }

          function cancel() {
            item.replaceChildren.apply(item, original);
          }

          input.addEventListener("keydown", function (e) {
            if (e.key === "Enter") save();
            if (e.key === "Escape") cancel();
          });

          item.replaceChildren(input, button("Save", save), button("Cancel", cancel));
          input.focus();
        }

        document.getElementById("addTodo").addEventListener("click", addTodo);
        document.getElementById("newTodo").addEventListener("keydown", function (e) {
          if (e.key === "Enter") addTodo();
        });

        document.getElementById("todoList").addEventListener("click", function (e) {
          var target = e.target.closest("[data-action]");
          if (!target) return;
          var item = target.closest(".todo-item");
          var id = item.dataset.id;
          switch (target.dataset.action) {
            case "toggle": postTool("todo_toggle", { id: id }); break;
            case "delete": postTool("todo_delete", { id: id }); break;
            case "edit": editTodo(item); break;
          }
        });
      })();
"#;

/// Escapes text for use in HTML element content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders one `.todo-item` row.
pub fn render_row(todo: &Todo) -> String {
    let id = escape_html(todo.id.as_str());
    let done = if todo.done { " done" } else { "" };
    format!(
        r#"
        <div class="todo-item" id="todo-{id}" data-id="{id}">
          <span class="todo-text{done}" data-action="toggle">{text}</span>
          <button class="todo-btn" data-action="edit">Edit</button>
          <button class="todo-btn" data-action="delete">Delete</button>
        </div>"#,
        text = escape_html(&todo.text),
    )
}

/// Renders the complete HTML document for `todos`.
pub fn render_document(todos: &[Todo]) -> String {
    let mut rows = String::new();
    for todo in todos {
        rows.push_str(&render_row(todo));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <style>{STYLE}    </style>
  </head>
  <body>
    <div class="container">
      <div class="todo-form">
        <input id="{NEW_TODO_INPUT_ID}" class="todo-input" placeholder="New task"/>
        <button id="{ADD_BUTTON_ID}" class="todo-btn">Add</button>
      </div>
      <div id="{TODO_LIST_ID}">{rows}
      </div>
    </div>
    <script>{SCRIPT}    </script>
  </body>
</html>
"#
    )
}
