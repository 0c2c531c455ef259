mod attribute;
mod field;
mod record;
