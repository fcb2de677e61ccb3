// Integration test modules
#[cfg(test)]
mod integration;
