mod field;
mod schema;
