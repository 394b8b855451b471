pub mod cli;
#[cfg(test)]
pub(crate) mod test_graphs;
