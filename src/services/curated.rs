use std::collections::HashMap;

use crate::models::place::{Place, PlaceCategory};

/// Hand-authored landmarks for a destination, used when the live lookup is
/// unavailable or comes back empty.
#[derive(Debug, Clone)]
pub struct CuratedCity {
    pub country: &'static str,
    pub places: Vec<Place>,
}

/// Injectable landmark dataset keyed by normalized (lower-cased) city name.
/// Data asset, not logic: adding a city means adding entries here.
pub struct CuratedCatalog {
    entries: HashMap<&'static str, CuratedCity>,
}

fn landmark(
    id: &str,
    name: &str,
    category: PlaceCategory,
    rating: f64,
    price_level: u8,
    address: &str,
    description: &str,
    coordinates: (f64, f64),
) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        category,
        rating,
        price_level,
        address: address.to_string(),
        description: description.to_string(),
        coordinates: Some(coordinates),
        photo_url: None,
    }
}

impl Default for CuratedCatalog {
    fn default() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "mathura",
            CuratedCity {
                country: "India",
                places: vec![
                    landmark(
                        "mathura_1",
                        "Krishna Janmabhoomi Temple",
                        PlaceCategory::Attraction,
                        4.8,
                        1,
                        "Krishna Janmasthan, Mathura, Uttar Pradesh",
                        "The sacred birthplace of Lord Krishna, one of Hinduism's most revered pilgrimage sites",
                        (27.5036, 77.6739),
                    ),
                    landmark(
                        "mathura_2",
                        "Dwarkadhish Temple",
                        PlaceCategory::Attraction,
                        4.7,
                        1,
                        "Dwarkadhish Mandir Road, Mathura",
                        "Beautiful temple dedicated to Lord Krishna with intricate Rajasthani architecture",
                        (27.5044, 77.6731),
                    ),
                    landmark(
                        "mathura_3",
                        "Vishram Ghat",
                        PlaceCategory::Attraction,
                        4.6,
                        1,
                        "Yamuna River, Mathura",
                        "Sacred bathing ghat where Lord Krishna rested after killing Kansa",
                        (27.5084, 77.6792),
                    ),
                    landmark(
                        "mathura_4",
                        "Govind Dev Temple",
                        PlaceCategory::Attraction,
                        4.5,
                        1,
                        "Vrindavan, Mathura",
                        "Ancient temple with stunning architecture dedicated to Krishna",
                        (27.5804, 77.7006),
                    ),
                    landmark(
                        "mathura_5",
                        "Kusum Sarovar",
                        PlaceCategory::Attraction,
                        4.4,
                        1,
                        "Govardhan, Mathura",
                        "Historic sandstone bathing tank associated with Radha-Krishna legends",
                        (27.4668, 77.7463),
                    ),
                    landmark(
                        "mathura_6",
                        "Brijwasi Mithai Wala",
                        PlaceCategory::Dining,
                        4.5,
                        2,
                        "Holi Gate, Mathura",
                        "Famous for authentic Mathura pedas and traditional sweets",
                        (27.4996, 77.6703),
                    ),
                    landmark(
                        "mathura_7",
                        "Radha Raman Temple",
                        PlaceCategory::Attraction,
                        4.6,
                        1,
                        "Vrindavan, Mathura",
                        "Ancient temple known for its beautiful deity and spiritual atmosphere",
                        (27.5781, 77.7027),
                    ),
                ],
            },
        );

        entries.insert(
            "delhi",
            CuratedCity {
                country: "India",
                places: vec![
                    landmark(
                        "delhi_1",
                        "Red Fort (Lal Qila)",
                        PlaceCategory::Attraction,
                        4.6,
                        2,
                        "Netaji Subhash Marg, Chandni Chowk, New Delhi",
                        "Historic Mughal fortress and UNESCO World Heritage Site",
                        (28.6562, 77.2410),
                    ),
                    landmark(
                        "delhi_2",
                        "India Gate",
                        PlaceCategory::Attraction,
                        4.5,
                        1,
                        "Rajpath, India Gate, New Delhi",
                        "Iconic war memorial and symbol of Delhi",
                        (28.6129, 77.2295),
                    ),
                    landmark(
                        "delhi_3",
                        "Qutub Minar",
                        PlaceCategory::Attraction,
                        4.7,
                        2,
                        "Mehrauli, New Delhi",
                        "Tallest brick minaret in the world, UNESCO World Heritage Site",
                        (28.5245, 77.1855),
                    ),
                    landmark(
                        "delhi_4",
                        "Lotus Temple",
                        PlaceCategory::Attraction,
                        4.6,
                        1,
                        "Lotus Temple Road, Bahapur, New Delhi",
                        "Stunning Bahai temple shaped like a lotus flower",
                        (28.5535, 77.2588),
                    ),
                    landmark(
                        "delhi_5",
                        "Humayun's Tomb",
                        PlaceCategory::Attraction,
                        4.5,
                        2,
                        "Nizamuddin, New Delhi",
                        "Beautiful Mughal architecture and UNESCO World Heritage Site",
                        (28.5933, 77.2507),
                    ),
                ],
            },
        );

        entries.insert(
            "agra",
            CuratedCity {
                country: "India",
                places: vec![
                    landmark(
                        "agra_1",
                        "Taj Mahal",
                        PlaceCategory::Attraction,
                        4.9,
                        3,
                        "Dharmapuri, Forest Colony, Tajganj, Agra",
                        "World-famous white marble mausoleum and UNESCO World Heritage Site",
                        (27.1751, 78.0421),
                    ),
                    landmark(
                        "agra_2",
                        "Agra Fort",
                        PlaceCategory::Attraction,
                        4.6,
                        2,
                        "Agra Fort, Rakabganj, Agra",
                        "Historic Mughal fortress with stunning architecture",
                        (27.1795, 78.0211),
                    ),
                    landmark(
                        "agra_3",
                        "Fatehpur Sikri",
                        PlaceCategory::Attraction,
                        4.5,
                        2,
                        "Fatehpur Sikri, Agra",
                        "Abandoned Mughal city with incredible architectural heritage",
                        (27.0945, 77.6619),
                    ),
                ],
            },
        );

        entries.insert(
            "jaipur",
            CuratedCity {
                country: "India",
                places: vec![
                    landmark(
                        "jaipur_1",
                        "Hawa Mahal",
                        PlaceCategory::Attraction,
                        4.5,
                        2,
                        "Hawa Mahal Rd, Badi Choupad, Jaipur",
                        "Iconic palace with intricate latticed windows",
                        (26.9239, 75.8267),
                    ),
                    landmark(
                        "jaipur_2",
                        "Amber Palace",
                        PlaceCategory::Attraction,
                        4.7,
                        3,
                        "Devisinghpura, Amer, Jaipur",
                        "Majestic hilltop palace with stunning architecture",
                        (26.9855, 75.8513),
                    ),
                    landmark(
                        "jaipur_3",
                        "City Palace",
                        PlaceCategory::Attraction,
                        4.6,
                        3,
                        "Tulsi Marg, Gangori Bazaar, Jaipur",
                        "Royal palace complex showcasing Rajasthani culture",
                        (26.9255, 75.8235),
                    ),
                ],
            },
        );

        Self { entries }
    }
}

impl CuratedCatalog {
    pub fn lookup(&self, city: &str) -> Option<&CuratedCity> {
        self.entries.get(city.trim().to_lowercase().as_str())
    }
}
