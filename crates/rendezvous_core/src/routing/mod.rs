pub mod dijkstra;
pub mod distances;
