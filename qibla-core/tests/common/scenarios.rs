//! Reference observers around the world

/// An observer with known Qibla geometry
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Expected initial bearing, degrees from true north
    pub bearing_deg: f64,
    /// Expected haversine distance, km
    pub distance_km: f64,
    /// Expected 16-point compass abbreviation
    pub compass: &'static str,
}

pub const NEW_YORK: City = City {
    name: "New York",
    latitude: 40.7128,
    longitude: -74.0060,
    bearing_deg: 58.48,
    distance_km: 10306.3,
    compass: "ENE",
};

pub const LONDON: City = City {
    name: "London",
    latitude: 51.5074,
    longitude: -0.1278,
    bearing_deg: 118.99,
    distance_km: 4793.8,
    compass: "ESE",
};

pub const SYDNEY: City = City {
    name: "Sydney",
    latitude: -33.8688,
    longitude: 151.2093,
    bearing_deg: 277.50,
    distance_km: 13236.3,
    compass: "W",
};

pub const JAKARTA: City = City {
    name: "Jakarta",
    latitude: -6.2088,
    longitude: 106.8456,
    bearing_deg: 295.15,
    distance_km: 7920.1,
    compass: "WNW",
};

pub const TOKYO: City = City {
    name: "Tokyo",
    latitude: 35.6762,
    longitude: 139.6503,
    bearing_deg: 293.00,
    distance_km: 9471.8,
    compass: "WNW",
};

pub const CAIRO: City = City {
    name: "Cairo",
    latitude: 30.0444,
    longitude: 31.2357,
    bearing_deg: 136.14,
    distance_km: 1287.2,
    compass: "SE",
};

pub const RIYADH: City = City {
    name: "Riyadh",
    latitude: 24.7136,
    longitude: 46.6753,
    bearing_deg: 243.80,
    distance_km: 790.3,
    compass: "WSW",
};

/// All reference cities
pub const CITIES: [City; 7] = [NEW_YORK, LONDON, SYDNEY, JAKARTA, TOKYO, CAIRO, RIYADH];
