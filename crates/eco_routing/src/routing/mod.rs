pub mod dijkstra;
pub mod eco_route;
pub mod shortest_path_algorithm;
