//! Fixed city lists backing the two summary panels and the nearby-area
//! lookup. These are data, not configuration; the original dashboard ships
//! them hardcoded and so do we.

/// Major domestic cities panel
pub const DOMESTIC_CITIES: [&str; 10] = [
    "Delhi",
    "Mumbai",
    "Kolkata",
    "Chennai",
    "Bengaluru",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
];

/// Major world cities panel
pub const WORLD_CITIES: [&str; 10] = [
    "New York",
    "London",
    "Tokyo",
    "Paris",
    "Sydney",
    "Singapore",
    "Dubai",
    "Moscow",
    "Toronto",
    "Cape Town",
];

/// Administratively nearby places for cities the dashboard knows about.
/// Lookup is by the provider-resolved city name, case-insensitively; unknown
/// cities get no nearby panel.
pub fn nearby_places(city: &str) -> Option<[&'static str; 6]> {
    match city.trim().to_lowercase().as_str() {
        "cuttack" => Some([
            "Bhubaneswar",
            "Jagatpur",
            "Choudwar",
            "Athagarh",
            "Tangi",
            "Banki",
        ]),
        "bhubaneswar" => Some(["Cuttack", "Puri", "Khordha", "Pipili", "Jatani", "Konark"]),
        "delhi" | "new delhi" => Some([
            "Noida",
            "Gurugram",
            "Ghaziabad",
            "Faridabad",
            "Greater Noida",
            "Sonipat",
        ]),
        "mumbai" => Some([
            "Thane",
            "Navi Mumbai",
            "Kalyan",
            "Vasai",
            "Panvel",
            "Bhiwandi",
        ]),
        "kolkata" => Some([
            "Howrah",
            "Barrackpore",
            "Serampore",
            "Chandannagar",
            "Kalyani",
            "Baruipur",
        ]),
        "chennai" => Some([
            "Tambaram",
            "Avadi",
            "Ambattur",
            "Chengalpattu",
            "Kanchipuram",
            "Tiruvallur",
        ]),
        _ => None,
    }
}
