mod arrays;
mod enums;
mod errors;
mod folding;
mod statements;
mod sugar;
