pub mod astro_time;
pub mod comet;
pub mod constants;
pub mod ephemeris;
pub mod errors;
pub mod frames;
mod kepler;
pub mod orbit_curve;
pub mod planets;
pub mod series;
