use crate::domain::entities::medical_center::MedicalCenter;

#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fee {
    pub service: String,
    pub price: f64,
}

/// Detailed card of the practitioner working at a centre.
#[derive(Debug, Clone, PartialEq)]
pub struct PractitionerProfile {
    pub center_id: String,
    pub name: String,
    pub title: String,
    pub distance: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub languages: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<Education>,
    pub fees: Vec<Fee>,
    pub payment_methods: Vec<String>,
    pub insurances: Vec<String>,
    pub opening_hours: Option<String>,
}

impl PractitionerProfile {
    /// Profile built from the centre card alone; the detailed sections stay
    /// empty.
    pub fn from_center(center: &MedicalCenter) -> Option<Self> {
        let practitioner = center.practitioner.as_ref()?;
        Some(Self {
            center_id: center.id.clone(),
            name: practitioner.name.clone(),
            title: practitioner.title.clone(),
            distance: None,
            address: center.address.clone(),
            phone: center.phone.clone(),
            languages: center.languages.clone(),
            experience: Vec::new(),
            education: Vec::new(),
            fees: Vec::new(),
            payment_methods: Vec::new(),
            insurances: Vec::new(),
            opening_hours: center.opening_hours.clone(),
        })
    }
}

/// Detailed profile of the centre's practitioner when one exists, the
/// centre summary otherwise.
pub fn profile_for(
    profiles: &[PractitionerProfile],
    center: &MedicalCenter,
) -> Option<PractitionerProfile> {
    profiles
        .iter()
        .find(|profile| profile.center_id == center.id)
        .map(|profile| PractitionerProfile {
            opening_hours: profile
                .opening_hours
                .clone()
                .or_else(|| center.opening_hours.clone()),
            ..profile.clone()
        })
        .or_else(|| PractitionerProfile::from_center(center))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock::centers::mock_medical_centers;
    use crate::infra::mock::practitioners::mock_practitioner_profiles;

    #[test]
    fn detailed_profile_wins_over_the_centre_card() {
        let centers = mock_medical_centers();
        let profile = profile_for(&mock_practitioner_profiles(), &centers[0])
            .expect("first centre has a practitioner");

        assert_eq!(profile.name, "Dr. Sarah Chen");
        assert_eq!(profile.fees.len(), 3);
        assert_eq!(profile.opening_hours.as_deref(), Some("8h-19h"));
    }

    #[test]
    fn centres_without_details_fall_back_to_their_card() {
        let centers = mock_medical_centers();
        let profile = profile_for(&mock_practitioner_profiles(), &centers[3])
            .expect("fourth centre has a practitioner");

        assert_eq!(profile.name, "Dr. Alexandre Dubois");
        assert_eq!(profile.title, "ORL");
        assert_eq!(profile.address, centers[3].address);
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn centre_without_practitioner_has_no_profile() {
        let mut center = mock_medical_centers().remove(4);
        center.practitioner = None;
        assert_eq!(profile_for(&[], &center), None);
    }
}
