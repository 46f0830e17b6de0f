use crate::retrieval::common::error::Result;
use crate::retrieval::raster::types::RasterImage;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<RasterImage>;
}
