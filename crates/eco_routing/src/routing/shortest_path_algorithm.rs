use crate::{error::Result, geopoint::GeoPoint, graph::Graph, routing::eco_route::EcoRoute};

pub trait ShortestPathAlgorithm {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<EcoRoute>;
}
