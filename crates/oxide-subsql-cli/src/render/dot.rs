//! Graphviz DOT rendering of a statement forest.
//!
//! Every statement becomes a tree of nodes hanging off an invisible `root`
//! node. Node ids (`n1`, `n2`, ...) are allocated in visiting order, so the
//! output for a given forest is deterministic.

use oxide_subsql::ast::{Expr, Statement, TableId};

/// Node shapes used in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Box,
    Ellipse,
    Circle,
}

impl Shape {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Ellipse => "ellipse",
            Self::Circle => "circle",
        }
    }
}

/// Escapes a label so it can be placed between double quotes.
fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{c}' => escaped.push_str("\\f"),
            '\u{8}' => escaped.push_str("\\b"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Accumulates node and edge declarations for one rendering.
struct DotRenderer {
    nodes: Vec<String>,
    edges: Vec<String>,
    last_id: u32,
}

impl DotRenderer {
    fn new() -> Self {
        Self {
            nodes: vec![String::from("root [style=invis];")],
            edges: vec![],
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> String {
        self.last_id += 1;
        format!("n{}", self.last_id)
    }

    fn node(&mut self, id: &str, shape: Shape, label: &str) {
        self.nodes.push(format!(
            "{id} [shape={},label=\"{}\"];",
            shape.as_str(),
            escape(label)
        ));
    }

    fn edge(&mut self, from: &str, to: &str, label: &str) {
        self.edges
            .push(format!("{from} -> {to} [label=\"{}\"];", escape(label)));
    }

    fn render_statement(&mut self, statement: &Statement) -> String {
        let id = self.next_id();
        self.node(&id, Shape::Box, statement.keyword());
        match statement {
            Statement::Use(stmt) => {
                let name = self.render_name(&stmt.database_name);
                self.edge(&id, &name, "databaseName");
            }
            Statement::Select(stmt) => {
                let list = self.render_expr_list(&stmt.select_list);
                self.edge(&id, &list, "selectList");
                if let Some(from) = &stmt.from {
                    let table = self.render_table_id(from);
                    self.edge(&id, &table, "from");
                }
                if let Some(condition) = &stmt.where_condition {
                    let condition = self.render_expr(condition);
                    self.edge(&id, &condition, "where");
                }
                if let Some(order_by) = &stmt.order_by {
                    let order_by = self.render_expr(order_by);
                    self.edge(&id, &order_by, "orderBy");
                }
            }
            Statement::Insert(stmt) => {
                let table = self.render_table_id(&stmt.into_table);
                self.edge(&id, &table, "into");
                let columns = self.render_name_list(&stmt.columns);
                self.edge(&id, &columns, "columns");
                let values = self.render_expr_list(&stmt.values);
                self.edge(&id, &values, "values");
            }
            Statement::Delete(stmt) => {
                let table = self.render_table_id(&stmt.from_table);
                self.edge(&id, &table, "from");
                let condition = self.render_expr(&stmt.where_condition);
                self.edge(&id, &condition, "where");
            }
        }
        id
    }

    fn render_expr(&mut self, expr: &Expr) -> String {
        let id = self.next_id();
        match expr {
            Expr::Identifier(name) => self.node(&id, Shape::Box, name),
            Expr::NumConstant(value) => self.node(&id, Shape::Ellipse, &value.to_string()),
            Expr::StringConstant(value) => self.node(&id, Shape::Box, value),
            Expr::FunctionApplication { name, args } => {
                self.node(&id, Shape::Ellipse, name);
                let args = self.render_expr_list(args);
                self.edge(&id, &args, "args");
            }
            Expr::BinOp { op, left, right } => {
                self.node(&id, Shape::Circle, op.as_str());
                let left = self.render_expr(left);
                let right = self.render_expr(right);
                self.edge(&id, &left, "first");
                self.edge(&id, &right, "second");
            }
            Expr::UnOp { op, operand } => {
                self.node(&id, Shape::Circle, op.as_str());
                let operand = self.render_expr(operand);
                self.edge(&id, &operand, "");
            }
            Expr::IsNullCheck { operand, negated } => {
                let label = if *negated { "IS NOT NULL" } else { "IS NULL" };
                self.node(&id, Shape::Ellipse, label);
                let operand = self.render_expr(operand);
                self.edge(&id, &operand, "");
            }
        }
        id
    }

    fn render_expr_list(&mut self, exprs: &[Expr]) -> String {
        let id = self.next_id();
        self.node(&id, Shape::Box, "[]");
        for (index, expr) in exprs.iter().enumerate() {
            let item = self.render_expr(expr);
            self.edge(&id, &item, &index.to_string());
        }
        id
    }

    fn render_name(&mut self, name: &str) -> String {
        let id = self.next_id();
        self.node(&id, Shape::Box, name);
        id
    }

    fn render_name_list(&mut self, names: &[String]) -> String {
        let id = self.next_id();
        self.node(&id, Shape::Box, "[]");
        for (index, name) in names.iter().enumerate() {
            let item = self.render_name(name);
            self.edge(&id, &item, &index.to_string());
        }
        id
    }

    fn render_table_id(&mut self, table_id: &TableId) -> String {
        let id = self.next_id();
        self.node(&id, Shape::Box, "TableId");
        if let Some(database) = &table_id.database {
            let database = self.render_name(database);
            self.edge(&id, &database, "database");
        }
        let table = self.render_name(&table_id.table);
        self.edge(&id, &table, "table");
        id
    }

    fn finish(self, statement_ids: &[String]) -> String {
        let mut out = String::new();
        out.push_str("/* DOT vizgraph file with an AST-forest of the parsed SQL statements. */\n");
        out.push_str("/* To generate a .PNG image of the AST, run: */\n");
        out.push_str("/* dot -Tpng <thisFile> -o <outputFile.png> */\n");
        out.push('\n');
        out.push_str("digraph {\n  rankdir=LR;\n");
        for line in self.nodes.iter().chain(&self.edges) {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }

        // Keeps the statements stacked top to bottom in input order.
        let mut chain = String::from("root");
        for id in statement_ids {
            chain.push_str(" -> ");
            chain.push_str(id);
        }
        out.push_str("  {\n    rank = same;\n    ");
        out.push_str(&chain);
        out.push_str(" [style=invis];\n    rankdir=TB;\n  }\n");
        out.push_str("}\n");
        out
    }
}

/// Renders the statements as a Graphviz DOT digraph.
#[must_use]
pub fn render_dot(statements: &[Statement]) -> String {
    let mut renderer = DotRenderer::new();
    let ids: Vec<String> = statements
        .iter()
        .map(|statement| renderer.render_statement(statement))
        .collect();
    tracing::debug!(nodes = renderer.last_id, "rendered DOT graph");
    renderer.finish(&ids)
}
