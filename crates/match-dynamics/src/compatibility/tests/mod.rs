mod common;
mod outcomes;
mod routing;
