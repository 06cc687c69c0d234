use crate::domain::entities::medical_center::{MedicalCenter, Practitioner};

struct Seed {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    city: &'static str,
    lat: f64,
    lng: f64,
    phone: &'static str,
    specialties: &'static [&'static str],
    opening_hours: &'static str,
    rating: f64,
    available_slots: u32,
    languages: &'static [&'static str],
    practitioner: (&'static str, &'static str),
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        name: "Centre Médical Saint-Michel",
        address: "15 Rue Saint-Michel, 75005 Paris",
        city: "Paris",
        lat: 48.8534,
        lng: 2.3488,
        phone: "01 42 34 56 78",
        specialties: &["Médecine générale", "Cardiologie", "Radiologie"],
        opening_hours: "8h-19h",
        rating: 4.5,
        available_slots: 8,
        languages: &["fr", "en", "ar"],
        practitioner: ("Dr. Sarah Chen", "Cardiologue"),
    },
    Seed {
        id: "2",
        name: "Clinique du Parc",
        address: "23 Avenue du Parc, 75014 Paris",
        city: "Paris",
        lat: 48.8234,
        lng: 2.3278,
        phone: "01 43 45 67 89",
        specialties: &["Médecine générale", "Pédiatrie", "Dermatologie"],
        opening_hours: "9h-20h",
        rating: 4.2,
        available_slots: 5,
        languages: &["fr", "en", "es"],
        practitioner: ("Dr. Thomas Martin", "Pédiatre"),
    },
    Seed {
        id: "3",
        name: "Hôpital Américain de Paris",
        address: "63 Boulevard Victor Hugo, 92200 Neuilly-sur-Seine",
        city: "Neuilly-sur-Seine",
        lat: 48.8847,
        lng: 2.2719,
        phone: "01 46 41 25 25",
        specialties: &["Médecine générale", "Chirurgie", "Urgences"],
        opening_hours: "24h/24",
        rating: 4.8,
        available_slots: 12,
        languages: &["fr", "en", "es", "zh"],
        practitioner: ("Dr. Marie Laurent", "Chirurgien"),
    },
    Seed {
        id: "4",
        name: "Centre Médical Europe",
        address: "44 Rue d'Amsterdam, 75009 Paris",
        city: "Paris",
        lat: 48.8789,
        lng: 2.3278,
        phone: "01 48 78 90 12",
        specialties: &["Médecine générale", "Gynécologie", "ORL"],
        opening_hours: "8h30-19h30",
        rating: 4.4,
        available_slots: 3,
        languages: &["fr", "ru", "en"],
        practitioner: ("Dr. Alexandre Dubois", "ORL"),
    },
    Seed {
        id: "5",
        name: "Cabinet Médical Montmartre",
        address: "12 Rue des Abbesses, 75018 Paris",
        city: "Paris",
        lat: 48.8845,
        lng: 2.3370,
        phone: "01 42 23 45 67",
        specialties: &["Médecine générale", "Dermatologie", "Allergologie"],
        opening_hours: "9h-18h",
        rating: 4.6,
        available_slots: 4,
        languages: &["fr", "en", "de"],
        practitioner: ("Dr. Emma Bernard", "Dermatologue"),
    },
    Seed {
        id: "6",
        name: "Centre de Santé Bastille",
        address: "28 Boulevard Richard Lenoir, 75011 Paris",
        city: "Paris",
        lat: 48.8578,
        lng: 2.3716,
        phone: "01 43 56 78 90",
        specialties: &["Médecine générale", "Rhumatologie", "Kinésithérapie"],
        opening_hours: "8h-20h",
        rating: 4.3,
        available_slots: 6,
        languages: &["fr", "en", "pt"],
        practitioner: ("Dr. Lucas Silva", "Rhumatologue"),
    },
    Seed {
        id: "7",
        name: "Clinique des Champs-Élysées",
        address: "45 Avenue Montaigne, 75008 Paris",
        city: "Paris",
        lat: 48.8666,
        lng: 2.3064,
        phone: "01 40 12 34 56",
        specialties: &["Médecine esthétique", "Dermatologie", "Chirurgie plastique"],
        opening_hours: "9h-19h",
        rating: 4.7,
        available_slots: 2,
        languages: &["fr", "en", "ar", "ru"],
        practitioner: ("Dr. Sofia Patel", "Chirurgien esthétique"),
    },
    Seed {
        id: "8",
        name: "Centre Médical Nation",
        address: "15 Avenue du Trône, 75012 Paris",
        city: "Paris",
        lat: 48.8484,
        lng: 2.3956,
        phone: "01 44 55 66 77",
        specialties: &["Médecine générale", "Endocrinologie", "Diabétologie"],
        opening_hours: "8h30-18h30",
        rating: 4.4,
        available_slots: 7,
        languages: &["fr", "en", "hi"],
        practitioner: ("Dr. Raj Kumar", "Endocrinologue"),
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn mock_medical_centers() -> Vec<MedicalCenter> {
    SEEDS
        .iter()
        .map(|seed| MedicalCenter {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            address: seed.address.to_string(),
            city: seed.city.to_string(),
            lat: seed.lat,
            lng: seed.lng,
            phone: Some(seed.phone.to_string()),
            specialties: owned(seed.specialties),
            opening_hours: Some(seed.opening_hours.to_string()),
            rating: Some(seed.rating),
            available_slots: Some(seed.available_slots),
            languages: owned(seed.languages),
            practitioner: Some(Practitioner {
                name: seed.practitioner.0.to_string(),
                title: seed.practitioner.1.to_string(),
            }),
        })
        .collect()
}
