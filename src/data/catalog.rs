use chrono::{TimeZone, Utc};

use crate::models::dashboard::VisitorStats;
use crate::models::destination::{Destination, DestinationCategory, GeoLocation};
use crate::models::guide::TourGuide;
use crate::models::itinerary::Mood;
use crate::models::marketplace::{MarketplaceItem, MarketplaceKind};
use crate::models::safety::{AlertSeverity, CrowdAlert, CrowdLevel, WeatherAlert};
use crate::models::tourist::{Badge, Tourist};

pub const ECO_WARRIOR_BADGE: &str = "Eco Warrior";

/// Read-only reference data for the whole platform. Built once at startup
/// and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    pub destinations: Vec<Destination>,
    pub marketplace: Vec<MarketplaceItem>,
    pub guides: Vec<TourGuide>,
    pub badge_catalog: Vec<Badge>,
    pub tourist: Tourist,
    pub weather_alerts: Vec<WeatherAlert>,
    pub crowd_alerts: Vec<CrowdAlert>,
    pub visitor_stats: Vec<VisitorStats>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: "1".to_string(),
            name: "Hundru Falls".to_string(),
            location: GeoLocation { lat: 23.4259, lng: 85.5934 },
            eco_score: 95,
            category: DestinationCategory::Adventure,
            description: "Spectacular 320-feet waterfall, perfect for adventure sports and photography".to_string(),
            activities: strings(&["Waterfall viewing", "Rock climbing", "Photography", "Trekking"]),
            best_for_mood: vec![Mood::Adventure, Mood::Relax],
        },
        Destination {
            id: "2".to_string(),
            name: "Dassam Falls".to_string(),
            location: GeoLocation { lat: 23.3991, lng: 85.5304 },
            eco_score: 92,
            category: DestinationCategory::Adventure,
            description: "Multi-tiered waterfall with natural pools for swimming and adventure".to_string(),
            activities: strings(&["Swimming", "Waterfall trekking", "Camping", "Adventure photography"]),
            best_for_mood: vec![Mood::Adventure, Mood::Relax],
        },
        Destination {
            id: "3".to_string(),
            name: "Betla National Park".to_string(),
            location: GeoLocation { lat: 23.85, lng: 84.1833 },
            eco_score: 93,
            category: DestinationCategory::Adventure,
            description: "Tiger reserve with diverse wildlife and thrilling jungle safaris".to_string(),
            activities: strings(&["Tiger safari", "Wildlife photography", "Jungle camping", "Bird watching"]),
            best_for_mood: vec![Mood::Adventure],
        },
        Destination {
            id: "4".to_string(),
            name: "Lodh Falls".to_string(),
            location: GeoLocation { lat: 23.4833, lng: 84.6167 },
            eco_score: 94,
            category: DestinationCategory::Adventure,
            description: "Highest waterfall in Jharkhand at 468 feet, a paradise for adventure seekers".to_string(),
            activities: strings(&["Waterfall viewing", "Rock climbing", "Adventure trekking", "Photography"]),
            best_for_mood: vec![Mood::Adventure],
        },
        Destination {
            id: "5".to_string(),
            name: "Jagannath Temple".to_string(),
            location: GeoLocation { lat: 23.3441, lng: 85.3096 },
            eco_score: 85,
            category: DestinationCategory::Spiritual,
            description: "Replica of famous Puri Jagannath Temple with divine architecture".to_string(),
            activities: strings(&["Temple darshan", "Aarti ceremony", "Religious festivals", "Spiritual meditation"]),
            best_for_mood: vec![Mood::Spiritual, Mood::Cultural],
        },
        Destination {
            id: "6".to_string(),
            name: "Baidyanath Dham".to_string(),
            location: GeoLocation { lat: 24.4869, lng: 86.7036 },
            eco_score: 95,
            category: DestinationCategory::Spiritual,
            description: "One of the 12 sacred Jyotirlingas, major pilgrimage destination".to_string(),
            activities: strings(&["Temple visits", "Spiritual discourse", "Pilgrimage", "Religious ceremonies"]),
            best_for_mood: vec![Mood::Spiritual, Mood::Cultural],
        },
        Destination {
            id: "7".to_string(),
            name: "Parasnath Hill".to_string(),
            location: GeoLocation { lat: 23.9667, lng: 86.1667 },
            eco_score: 92,
            category: DestinationCategory::Spiritual,
            description: "Sacred Jain pilgrimage site with ancient marble temples on highest peak".to_string(),
            activities: strings(&["Jain temple pilgrimage", "Spiritual trekking", "Meditation", "Religious study"]),
            best_for_mood: vec![Mood::Spiritual, Mood::Adventure],
        },
        Destination {
            id: "8".to_string(),
            name: "Maluti Temples".to_string(),
            location: GeoLocation { lat: 24.9667, lng: 87.3167 },
            eco_score: 90,
            category: DestinationCategory::Spiritual,
            description: "Historic complex of 108 terracotta temples with exquisite craftsmanship".to_string(),
            activities: strings(&["Heritage temple tour", "Terracotta art viewing", "Cultural learning", "Photography"]),
            best_for_mood: vec![Mood::Spiritual, Mood::Cultural],
        },
        Destination {
            id: "9".to_string(),
            name: "Patratu Valley".to_string(),
            location: GeoLocation { lat: 23.75, lng: 85.5 },
            eco_score: 88,
            category: DestinationCategory::Natural,
            description: "Scenic valley with winding roads and breathtaking mountain views".to_string(),
            activities: strings(&["Scenic drives", "Valley photography", "Nature walks", "Peaceful meditation"]),
            best_for_mood: vec![Mood::Relax],
        },
        Destination {
            id: "10".to_string(),
            name: "Dimna Lake".to_string(),
            location: GeoLocation { lat: 22.7167, lng: 86.1833 },
            eco_score: 85,
            category: DestinationCategory::Natural,
            description: "Artificial lake surrounded by hills, perfect for boating and relaxation".to_string(),
            activities: strings(&["Boating", "Lake photography", "Peaceful walks", "Water sports"]),
            best_for_mood: vec![Mood::Relax, Mood::Adventure],
        },
        Destination {
            id: "11".to_string(),
            name: "McCluskieganj".to_string(),
            location: GeoLocation { lat: 23.6167, lng: 85.1833 },
            eco_score: 86,
            category: DestinationCategory::Natural,
            description: "Anglo-Indian settlement with colonial houses and beautiful gardens".to_string(),
            activities: strings(&["Heritage walks", "Colonial architecture viewing", "Garden tours", "Photography"]),
            best_for_mood: vec![Mood::Relax, Mood::Cultural],
        },
        Destination {
            id: "12".to_string(),
            name: "Tagore Hill".to_string(),
            location: GeoLocation { lat: 23.3773, lng: 85.3221 },
            eco_score: 87,
            category: DestinationCategory::Natural,
            description: "Historic hill where Rabindranath Tagore found inspiration for his works".to_string(),
            activities: strings(&["Nature walks", "Literary appreciation", "Sunset viewing", "Peaceful meditation"]),
            best_for_mood: vec![Mood::Relax, Mood::Cultural],
        },
        Destination {
            id: "13".to_string(),
            name: "Chhau Dance (Saraikela)".to_string(),
            location: GeoLocation { lat: 22.7, lng: 85.9333 },
            eco_score: 90,
            category: DestinationCategory::Cultural,
            description: "UNESCO recognized classical dance form with elaborate masks and costumes".to_string(),
            activities: strings(&["Dance performances", "Mask workshops", "Cultural learning", "Festival participation"]),
            best_for_mood: vec![Mood::Cultural],
        },
        Destination {
            id: "14".to_string(),
            name: "Santhali Tribal Dance".to_string(),
            location: GeoLocation { lat: 24.5, lng: 87.0 },
            eco_score: 88,
            category: DestinationCategory::Cultural,
            description: "Traditional tribal dance showcasing rich Santhali culture and heritage".to_string(),
            activities: strings(&["Tribal dance viewing", "Cultural immersion", "Traditional music", "Folk festivals"]),
            best_for_mood: vec![Mood::Cultural],
        },
        Destination {
            id: "15".to_string(),
            name: "Hazaribagh Rock Paintings".to_string(),
            location: GeoLocation { lat: 23.9833, lng: 85.3667 },
            eco_score: 92,
            category: DestinationCategory::Cultural,
            description: "Ancient rock art depicting prehistoric life and cultural evolution".to_string(),
            activities: strings(&["Rock art viewing", "Archaeological exploration", "Historical study", "Photography"]),
            best_for_mood: vec![Mood::Cultural],
        },
        Destination {
            id: "16".to_string(),
            name: "Ranchi Museum".to_string(),
            location: GeoLocation { lat: 23.3569, lng: 85.312 },
            eco_score: 83,
            category: DestinationCategory::Cultural,
            description: "State museum showcasing tribal culture, archaeology and natural history".to_string(),
            activities: strings(&["Museum tours", "Cultural exhibits", "Historical artifacts viewing", "Educational visits"]),
            best_for_mood: vec![Mood::Cultural],
        },
    ]
}

fn marketplace() -> Vec<MarketplaceItem> {
    vec![
        MarketplaceItem {
            id: "1".to_string(),
            name: "Handwoven Tribal Basket".to_string(),
            kind: MarketplaceKind::Handicraft,
            price: 1500.0,
            eco_score: 95,
            description: "Authentic bamboo basket crafted by Santhal artisans".to_string(),
            seller: "Tribal Crafts Collective".to_string(),
            rating: 4.8,
            reviews: 124,
        },
        MarketplaceItem {
            id: "2".to_string(),
            name: "Eco Homestay in Netarhat".to_string(),
            kind: MarketplaceKind::Homestay,
            price: 2500.0,
            eco_score: 90,
            description: "Solar-powered homestay with organic meals and hill views".to_string(),
            seller: "Green Valley Homestays".to_string(),
            rating: 4.9,
            reviews: 89,
        },
        MarketplaceItem {
            id: "3".to_string(),
            name: "Sacred Grove Nature Walk".to_string(),
            kind: MarketplaceKind::EcoTour,
            price: 800.0,
            eco_score: 98,
            description: "Guided tour through protected sacred forests with tribal guides".to_string(),
            seller: "Jharkhand Eco Tours".to_string(),
            rating: 4.7,
            reviews: 156,
        },
        MarketplaceItem {
            id: "4".to_string(),
            name: "Traditional Dokra Art".to_string(),
            kind: MarketplaceKind::Handicraft,
            price: 3200.0,
            eco_score: 88,
            description: "Ancient metal casting art depicting tribal life".to_string(),
            seller: "Dhokra Art House".to_string(),
            rating: 4.6,
            reviews: 67,
        },
        MarketplaceItem {
            id: "5".to_string(),
            name: "Forest Canopy Camping".to_string(),
            kind: MarketplaceKind::EcoTour,
            price: 4500.0,
            eco_score: 93,
            description: "Overnight camping experience in sustainably managed forests".to_string(),
            seller: "Wild Jharkhand Adventures".to_string(),
            rating: 4.8,
            reviews: 203,
        },
        MarketplaceItem {
            id: "6".to_string(),
            name: "Village Pottery Workshop".to_string(),
            kind: MarketplaceKind::EcoTour,
            price: 1200.0,
            eco_score: 91,
            description: "Learn traditional pottery from local artisans".to_string(),
            seller: "Heritage Skills Academy".to_string(),
            rating: 4.5,
            reviews: 78,
        },
    ]
}

fn guides() -> Vec<TourGuide> {
    vec![
        TourGuide {
            id: "1".to_string(),
            name: "Ravi Kumar Munda".to_string(),
            rating: 4.9,
            verified: true,
            specializations: strings(&["Tribal Culture", "Eco-tourism", "Wildlife"]),
            price_per_day: 2500.0,
            location: "Ranchi".to_string(),
            ledger_id: Some("0x1a2b3c4d5e6f".to_string()),
        },
        TourGuide {
            id: "2".to_string(),
            name: "Sunita Devi".to_string(),
            rating: 4.8,
            verified: true,
            specializations: strings(&["Handicrafts", "Local Cuisine", "Village Tours"]),
            price_per_day: 2000.0,
            location: "Netarhat".to_string(),
            ledger_id: Some("0x2b3c4d5e6f7a".to_string()),
        },
        TourGuide {
            id: "3".to_string(),
            name: "Arjun Singh".to_string(),
            rating: 4.7,
            verified: true,
            specializations: strings(&["Adventure Sports", "Trekking", "Photography"]),
            price_per_day: 3000.0,
            location: "Betla".to_string(),
            ledger_id: Some("0x3c4d5e6f7a8b".to_string()),
        },
        TourGuide {
            id: "4".to_string(),
            name: "Maya Tirkey".to_string(),
            rating: 4.6,
            verified: false,
            specializations: strings(&["Spiritual Tours", "Traditional Medicine", "Folklore"]),
            price_per_day: 1800.0,
            location: "Rajrappa".to_string(),
            ledger_id: None,
        },
    ]
}

fn badge_catalog() -> Vec<Badge> {
    vec![
        Badge {
            id: "1".to_string(),
            name: ECO_WARRIOR_BADGE.to_string(),
            icon: "\u{1F331}".to_string(),
            description: "Earned 1000+ eco points".to_string(),
            date_earned: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        },
        Badge {
            id: "2".to_string(),
            name: "Culture Explorer".to_string(),
            icon: "\u{1F3DB}\u{FE0F}".to_string(),
            description: "Visited 5+ cultural sites".to_string(),
            date_earned: Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 0).unwrap(),
        },
        Badge {
            id: "3".to_string(),
            name: "Nature Lover".to_string(),
            icon: "\u{1F98B}".to_string(),
            description: "Completed 3+ eco tours".to_string(),
            date_earned: Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap(),
        },
        Badge {
            id: "4".to_string(),
            name: "Local Supporter".to_string(),
            icon: "\u{1F91D}".to_string(),
            description: "Purchased 10+ local handicrafts".to_string(),
            date_earned: Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap(),
        },
    ]
}

fn weather_alerts() -> Vec<WeatherAlert> {
    vec![
        WeatherAlert {
            id: "1".to_string(),
            severity: AlertSeverity::Warning,
            message: "Heavy rainfall expected in Netarhat region".to_string(),
            location: "Netarhat".to_string(),
            timestamp: Utc::now(),
        },
        WeatherAlert {
            id: "2".to_string(),
            severity: AlertSeverity::Info,
            message: "Clear skies perfect for wildlife photography".to_string(),
            location: "Betla National Park".to_string(),
            timestamp: Utc::now(),
        },
    ]
}

fn crowd_alerts() -> Vec<CrowdAlert> {
    vec![
        CrowdAlert {
            id: "1".to_string(),
            location: "Rajrappa Temple".to_string(),
            crowd_level: CrowdLevel::High,
            message: "High visitor volume during festival season".to_string(),
            timestamp: Utc::now(),
        },
        CrowdAlert {
            id: "2".to_string(),
            location: "Hundru Falls".to_string(),
            crowd_level: CrowdLevel::Medium,
            message: "Moderate crowd, good time to visit".to_string(),
            timestamp: Utc::now(),
        },
    ]
}

fn visitor_stats() -> Vec<VisitorStats> {
    let months = [
        ("Jan", 12000, 82, None),
        ("Feb", 15000, 85, None),
        ("Mar", 18000, 88, None),
        ("Apr", 22000, 87, None),
        ("May", 20000, 83, None),
        ("Jun", 16000, 80, None),
        ("Jul", 25000, 85, None),
        ("Aug", 28000, 89, None),
        ("Sep", 24000, 91, None),
        ("Oct", 30000, 92, Some(32000)),
        ("Nov", 0, 0, Some(35000)),
        ("Dec", 0, 0, Some(38000)),
    ];

    months
        .iter()
        .map(|(month, visitors, eco_score, forecast)| VisitorStats {
            month: month.to_string(),
            visitors: *visitors,
            eco_score: *eco_score,
            forecast: *forecast,
        })
        .collect()
}

fn demo_tourist(badges: &[Badge]) -> Tourist {
    Tourist {
        id: "1".to_string(),
        name: "Tourist Explorer".to_string(),
        eco_score: 850,
        badges: badges.to_vec(),
        total_points: 1250,
    }
}

pub fn load_catalog() -> Catalog {
    let badges = badge_catalog();
    let tourist = demo_tourist(&badges);

    Catalog {
        destinations: destinations(),
        marketplace: marketplace(),
        guides: guides(),
        badge_catalog: badges,
        tourist,
        weather_alerts: weather_alerts(),
        crowd_alerts: crowd_alerts(),
        visitor_stats: visitor_stats(),
    }
}
