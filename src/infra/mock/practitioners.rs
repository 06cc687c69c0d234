use crate::domain::entities::practitioner::{Education, Fee, PractitionerProfile};

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn education(degree: &str, institution: &str, year: &str) -> Education {
    Education {
        degree: degree.to_string(),
        institution: institution.to_string(),
        year: year.to_string(),
    }
}

fn fees(entries: &[(&str, f64)]) -> Vec<Fee> {
    entries
        .iter()
        .map(|(service, price)| Fee {
            service: service.to_string(),
            price: *price,
        })
        .collect()
}

/// Detailed profiles keyed by the id of the centre they work at.
pub fn mock_practitioner_profiles() -> Vec<PractitionerProfile> {
    vec![
        PractitionerProfile {
            center_id: "1".to_string(),
            name: "Dr. Sarah Chen".to_string(),
            title: "Cardiologue".to_string(),
            distance: Some("1.2 km".to_string()),
            address: "15 Rue Saint-Michel, 75005 Paris".to_string(),
            phone: Some("01 42 34 56 78".to_string()),
            languages: owned(&["fr", "en", "zh"]),
            experience: owned(&[
                "Plus de 10 ans en médecine générale",
                "Ancienne cheffe de clinique à l'Hôpital Saint-Louis",
                "Recherche en médecine préventive",
                "Expérience médicale en Chine et au Royaume-Uni",
            ]),
            education: vec![
                education("Doctorat en médecine", "Université Paris Descartes", "2010"),
                education("Internat de médecine générale", "Hôpital Saint-Louis", "2013"),
            ],
            fees: fees(&[("Consultation", 60.0), ("Bilan annuel", 120.0), ("ECG", 75.0)]),
            payment_methods: owned(&["Carte bancaire", "Espèces", "Carte Vitale"]),
            insurances: owned(&["CPAM", "MGEN", "Harmonie Mutuelle"]),
            opening_hours: None,
        },
        PractitionerProfile {
            center_id: "2".to_string(),
            name: "Dr. Thomas Martin".to_string(),
            title: "Pédiatre".to_string(),
            distance: Some("2.3 km".to_string()),
            address: "23 Avenue du Parc, 75014 Paris".to_string(),
            phone: Some("01 43 45 67 89".to_string()),
            languages: owned(&["fr", "en"]),
            experience: owned(&[
                "15 ans en pédiatrie",
                "Chef du service de pédiatrie à la Clinique du Parc",
                "Spécialisé dans le développement de l'enfant",
            ]),
            education: vec![education("Doctorat en pédiatrie", "Université Lyon 1", "2008")],
            fees: fees(&[("Consultation", 65.0), ("Bilan de développement", 90.0)]),
            payment_methods: owned(&["Carte bancaire", "Espèces"]),
            insurances: owned(&["CPAM", "MGEN"]),
            opening_hours: None,
        },
        PractitionerProfile {
            center_id: "3".to_string(),
            name: "Dr. Marie Laurent".to_string(),
            title: "Chirurgien".to_string(),
            distance: Some("3.1 km".to_string()),
            address: "63 Boulevard Victor Hugo, 92200 Neuilly-sur-Seine".to_string(),
            phone: Some("01 46 41 25 25".to_string()),
            languages: owned(&["fr", "en", "es"]),
            experience: owned(&[
                "20 ans en chirurgie",
                "Cheffe du service de chirurgie à l'Hôpital Américain de Paris",
            ]),
            education: vec![education("Doctorat en chirurgie", "Harvard Medical School", "2003")],
            fees: fees(&[("Consultation", 80.0), ("Consultation chirurgicale", 150.0)]),
            payment_methods: owned(&["Carte bancaire", "Assurance"]),
            insurances: owned(&["Toutes les grandes mutuelles"]),
            opening_hours: None,
        },
    ]
}
