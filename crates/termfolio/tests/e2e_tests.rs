mod common;
mod e2e;
