//! Fixed sample set inserted when the store is first initialized.
//!
//! # Invariants
//! - Rows are inserted in list order, so ids follow it starting at 1.
//! - Seed rows carry no id; the store assigns it.

use log::debug;
use rusqlite::{params, Connection};

/// Area of the Greater Toronto Area a seed location belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    DowntownToronto,
    Scarborough,
    Mississauga,
    Brampton,
    Markham,
    Ajax,
    Pickering,
    Oshawa,
    NorthYork,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Self::DowntownToronto => "Downtown Toronto",
            Self::Scarborough => "Scarborough",
            Self::Mississauga => "Mississauga",
            Self::Brampton => "Brampton",
            Self::Markham => "Markham",
            Self::Ajax => "Ajax",
            Self::Pickering => "Pickering",
            Self::Oshawa => "Oshawa",
            Self::NorthYork => "North York",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedLocation {
    pub region: Region,
    pub address: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn seed(
    region: Region,
    address: &'static str,
    latitude: f64,
    longitude: f64,
) -> SeedLocation {
    SeedLocation {
        region,
        address,
        latitude,
        longitude,
    }
}

const SEED_LOCATIONS: &[SeedLocation] = &[
    seed(Region::DowntownToronto, "Union Station, Toronto", 43.6452, -79.3806),
    seed(Region::DowntownToronto, "CN Tower, Toronto", 43.6426, -79.3871),
    seed(Region::DowntownToronto, "Rogers Centre, Toronto", 43.6414, -79.3894),
    seed(Region::DowntownToronto, "Ripley's Aquarium, Toronto", 43.6424, -79.3860),
    seed(Region::DowntownToronto, "Toronto Eaton Centre, Toronto", 43.6544, -79.3807),
    seed(Region::DowntownToronto, "St. Lawrence Market, Toronto", 43.6487, -79.3716),
    seed(Region::DowntownToronto, "City Hall, Toronto", 43.6534, -79.3839),
    seed(Region::DowntownToronto, "Harbourfront Centre, Toronto", 43.6388, -79.3817),
    seed(Region::DowntownToronto, "Distillery District, Toronto", 43.6503, -79.3598),
    seed(Region::DowntownToronto, "Yonge-Dundas Square, Toronto", 43.6561, -79.3802),
    seed(Region::DowntownToronto, "Art Gallery of Ontario, Toronto", 43.6536, -79.3925),
    seed(Region::DowntownToronto, "Royal Ontario Museum, Toronto", 43.6677, -79.3948),
    seed(Region::DowntownToronto, "Casa Loma, Toronto", 43.6780, -79.4094),
    seed(Region::DowntownToronto, "Scotiabank Arena, Toronto", 43.6435, -79.3791),
    seed(Region::DowntownToronto, "Financial District, Toronto", 43.6489, -79.3817),
    seed(Region::Scarborough, "Scarborough Town Centre", 43.7764, -79.2577),
    seed(Region::Scarborough, "Scarborough Bluffs Park", 43.7118, -79.2363),
    seed(Region::Scarborough, "Toronto Zoo", 43.8206, -79.1847),
    seed(Region::Scarborough, "Rouge National Urban Park", 43.8233, -79.1450),
    seed(Region::Scarborough, "Scarborough GO Station", 43.7742, -79.2574),
    seed(Region::Scarborough, "Centennial College Progress Campus", 43.7855, -79.2269),
    seed(Region::Scarborough, "Thomson Memorial Park", 43.7672, -79.2322),
    seed(Region::Scarborough, "Guild Park and Gardens", 43.7484, -79.1944),
    seed(Region::Scarborough, "Agincourt Mall", 43.7866, -79.2811),
    seed(Region::Scarborough, "Cedarbrae Mall", 43.7617, -79.2228),
    seed(Region::Scarborough, "Scarborough Civic Centre", 43.7733, -79.2577),
    seed(Region::Scarborough, "L'Amoreaux Park", 43.8038, -79.3067),
    seed(Region::Scarborough, "Morningside Park", 43.7861, -79.1941),
    seed(Region::Scarborough, "Port Union Waterfront Park", 43.7831, -79.1317),
    seed(Region::Scarborough, "Scarborough Village", 43.7447, -79.2148),
    seed(Region::Mississauga, "Square One Shopping Centre", 43.5933, -79.6424),
    seed(Region::Mississauga, "Mississauga Celebration Square", 43.5933, -79.6441),
    seed(Region::Mississauga, "Port Credit", 43.5501, -79.5837),
    seed(Region::Mississauga, "Lakeside Park, Mississauga", 43.5503, -79.5843),
    seed(Region::Mississauga, "Kariya Park", 43.5886, -79.6401),
    seed(Region::Mississauga, "Erin Mills Town Centre", 43.5517, -79.7395),
    seed(Region::Mississauga, "Mississauga Valley Park", 43.5698, -79.6079),
    seed(Region::Mississauga, "Credit Valley Hospital", 43.5826, -79.6666),
    seed(Region::Mississauga, "Clarkson GO Station", 43.5168, -79.6387),
    seed(Region::Mississauga, "Streetsville Memorial Park", 43.5848, -79.7180),
    seed(Region::Mississauga, "Meadowvale Town Centre", 43.5965, -79.7506),
    seed(Region::Mississauga, "Heartland Town Centre", 43.6383, -79.7373),
    seed(Region::Mississauga, "Living Arts Centre", 43.5900, -79.6441),
    seed(Region::Mississauga, "Mississauga City Hall", 43.5893, -79.6441),
    seed(Region::Mississauga, "Burnhamthorpe Library", 43.5914, -79.6451),
    seed(Region::Brampton, "Brampton City Hall", 43.6834, -79.7614),
    seed(Region::Brampton, "Bramalea City Centre", 43.7309, -79.7619),
    seed(Region::Brampton, "Gage Park, Brampton", 43.6833, -79.7537),
    seed(Region::Brampton, "Chinguacousy Park", 43.7064, -79.7394),
    seed(Region::Brampton, "Heart Lake Conservation Area", 43.6956, -79.8053),
    seed(Region::Brampton, "Professor's Lake", 43.6988, -79.7728),
    seed(Region::Brampton, "Brampton GO Station", 43.6831, -79.7595),
    seed(Region::Brampton, "Shoppers World Brampton", 43.6993, -79.7370),
    seed(Region::Brampton, "Trinity Common Mall", 43.6658, -79.7789),
    seed(Region::Brampton, "Brampton Gateway Terminal", 43.6841, -79.7599),
    seed(Region::Markham, "Markham Civic Centre", 43.8561, -79.3370),
    seed(Region::Markham, "Pacific Mall, Markham", 43.8267, -79.3028),
    seed(Region::Markham, "Markville Shopping Centre", 43.8607, -79.3316),
    seed(Region::Markham, "Main Street Markham", 43.8753, -79.2620),
    seed(Region::Markham, "Toogood Pond Park", 43.8689, -79.3324),
    seed(Region::Markham, "Aaniin Community Centre", 43.8556, -79.3355),
    seed(Region::Markham, "Unionville Main Street", 43.8478, -79.3101),
    seed(Region::Markham, "Milliken Mills Park", 43.8308, -79.2964),
    seed(Region::Markham, "Rouge Valley Conservation Centre", 43.8442, -79.2428),
    seed(Region::Markham, "Markham Museum", 43.9006, -79.3633),
    seed(Region::Ajax, "Ajax GO Station", 43.8508, -79.0364),
    seed(Region::Ajax, "Ajax Town Hall", 43.8537, -79.0365),
    seed(Region::Ajax, "Ajax Waterfront Park", 43.8692, -79.0183),
    seed(Region::Ajax, "Greenwood Conservation Area", 43.8508, -79.0530),
    seed(Region::Ajax, "Paradise Beach", 43.8619, -79.0138),
    seed(Region::Ajax, "Ajax Community Centre", 43.8508, -79.0368),
    seed(Region::Ajax, "Rotary Park Ajax", 43.8647, -79.0200),
    seed(Region::Ajax, "Ajax Public Library", 43.8502, -79.0370),
    seed(Region::Pickering, "Pickering Town Centre", 43.8384, -79.0893),
    seed(Region::Pickering, "Pickering GO Station", 43.8358, -79.0893),
    seed(Region::Pickering, "Pickering Civic Complex", 43.8337, -79.0893),
    seed(Region::Pickering, "Frenchman's Bay", 43.8356, -79.0747),
    seed(Region::Pickering, "Pickering Recreation Complex", 43.8364, -79.0683),
    seed(Region::Pickering, "Beachfront Park Pickering", 43.8247, -79.0891),
    seed(Region::Pickering, "Rougemount Park", 43.8142, -79.1336),
    seed(Region::Oshawa, "Oshawa Centre", 43.8971, -78.8658),
    seed(Region::Oshawa, "Oshawa City Hall", 43.8971, -78.8658),
    seed(Region::Oshawa, "Parkwood Estate", 43.9169, -78.8342),
    seed(Region::Oshawa, "Oshawa GO Station", 43.8680, -78.8474),
    seed(Region::Oshawa, "Lakeview Park, Oshawa", 43.8657, -78.8419),
    seed(Region::Oshawa, "Canadian Automotive Museum", 43.8947, -78.8687),
    seed(Region::Oshawa, "Oshawa Valley Botanical Gardens", 43.9350, -78.8650),
    seed(Region::Oshawa, "Tribute Communities Centre", 43.8994, -78.8629),
    seed(Region::Oshawa, "Durham College", 43.9447, -78.8967),
    seed(Region::Oshawa, "Oshawa Public Libraries", 43.8971, -78.8658),
    seed(Region::NorthYork, "Yorkdale Shopping Centre", 43.7253, -79.4522),
    seed(Region::NorthYork, "York University", 43.7735, -79.5019),
    seed(Region::NorthYork, "North York Centre", 43.7677, -79.4163),
    seed(Region::NorthYork, "Mel Lastman Square", 43.7677, -79.4150),
    seed(Region::NorthYork, "Black Creek Pioneer Village", 43.7676, -79.5179),
    seed(Region::NorthYork, "Edwards Gardens", 43.7279, -79.3583),
    seed(Region::NorthYork, "Fairview Mall", 43.7785, -79.3449),
    seed(Region::NorthYork, "Toronto Botanical Garden", 43.7279, -79.3625),
    seed(Region::NorthYork, "Earl Bales Park", 43.7548, -79.4313),
    seed(Region::NorthYork, "Downsview Park", 43.7408, -79.4774),
];

/// Returns the seed set in insertion order.
pub fn seed_locations() -> &'static [SeedLocation] {
    SEED_LOCATIONS
}

/// Inserts every seed row and returns how many were written.
///
/// Callers run this inside the transaction that created the table.
pub(crate) fn insert_seed_locations(conn: &Connection) -> rusqlite::Result<usize> {
    let mut stmt = conn.prepare(
        "INSERT INTO locations (address, latitude, longitude) VALUES (?1, ?2, ?3);",
    )?;

    let mut inserted = 0;
    for location in SEED_LOCATIONS {
        inserted += stmt.execute(params![
            location.address,
            location.latitude,
            location.longitude
        ])?;
    }

    debug!("event=db_seed module=db status=ok rows={inserted}");
    Ok(inserted)
}
