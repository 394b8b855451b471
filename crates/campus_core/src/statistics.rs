use std::{
    fmt::{Display, Write},
    time::{Duration, Instant},
};

use anyhow::anyhow;
use histogram::Histogram;

use crate::graph::{node_index, Graph};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes settled in {:?}",
            self.nodes_settled, self.duration
        )
    }
}

pub fn degree_hist(g: &Graph) -> anyhow::Result<Histogram> {
    let hist = Histogram::new(0, 10, 30).map_err(|e| anyhow!("{e:?}"))?;
    for node in 0..g.num_locations() {
        let degree = g.degree(node_index(node));
        hist.increment(degree as u64, 1)
            .map_err(|e| anyhow!("{e:?}"))?;
    }
    Ok(hist)
}

/// One line per non-empty bucket: `[low-high]: count`
pub fn format_degree_hist(g: &Graph) -> anyhow::Result<String> {
    let hist = degree_hist(g)?;
    let mut out = String::new();
    for bucket in hist.into_iter().filter(|b| b.count() > 0) {
        writeln!(out, "[{}-{}]: {}", bucket.low(), bucket.high(), bucket.count())?;
    }
    Ok(out)
}

pub fn average_degree(g: &Graph) -> f64 {
    if g.num_locations() == 0 {
        return 0.0;
    }
    let sum: usize = (0..g.num_locations())
        .map(|node| g.degree(node_index(node)))
        .sum();
    sum as f64 / g.num_locations() as f64
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{node_index, Graph, GraphBuilder},
        search::dijkstra::Dijkstra,
        statistics::{average_degree, format_degree_hist},
    };

    #[test]
    fn stats_work() {
        let g = Graph::reference().unwrap();

        let mut d = Dijkstra::new(&g);
        d.search(node_index(0), node_index(14)).unwrap();

        assert!(d.stats.duration.is_some());
        assert!(d.stats.nodes_settled > 1);
        assert!(d.stats.nodes_settled <= g.num_locations());
    }

    #[test]
    fn average_degree_counts_both_endpoints() {
        let g = Graph::reference().unwrap();

        let expected = 2.0 * 39.0 / 23.0;
        assert!((average_degree(&g) - expected).abs() < 1e-9);
        assert_eq!(average_degree(&GraphBuilder::new().build()), 0.0);
    }

    #[test]
    fn degree_hist_works() {
        let g = Graph::reference().unwrap();

        let hist = format_degree_hist(&g).unwrap();
        println!("{hist}");
        assert!(!hist.is_empty());
    }
}
