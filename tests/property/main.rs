mod layout;
mod resolver;
