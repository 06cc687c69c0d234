use crate::domain::entities::medical_center::MedicalCenter;

pub const MISSING_TOKEN_MESSAGE: &str = "Carte indisponible - jeton API manquant";

const STYLE: &str = "mapbox/streets-v12";
const SIZE: &str = "600x300";
/// Paris, used when there is nothing to pin.
const DEFAULT_VIEW: &str = "2.3522,48.8566,12";

#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
    pub highlighted: bool,
}

impl MapPoint {
    pub fn for_center(center: &MedicalCenter, selected: Option<&str>) -> Self {
        Self {
            lat: center.lat,
            lng: center.lng,
            highlighted: selected == Some(center.id.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapView {
    Placeholder(&'static str),
    Image { url: String },
}

impl MapView {
    pub fn from_config(token: Option<&str>, points: &[MapPoint]) -> Self {
        match token.map(str::trim).filter(|token| !token.is_empty()) {
            Some(token) => MapView::Image {
                url: static_map_url(token, points),
            },
            None => MapView::Placeholder(MISSING_TOKEN_MESSAGE),
        }
    }
}

/// Static Images API url with one pin per point.
pub fn static_map_url(token: &str, points: &[MapPoint]) -> String {
    if points.is_empty() {
        return format!(
            "https://api.mapbox.com/styles/v1/{STYLE}/static/{DEFAULT_VIEW}/{SIZE}?access_token={token}"
        );
    }

    let pins = points
        .iter()
        .map(|point| {
            let color = if point.highlighted { "ef4444" } else { "3b82f6" };
            format!("pin-s+{color}({:.4},{:.4})", point.lng, point.lat)
        })
        .collect::<Vec<_>>()
        .join(",");

    format!("https://api.mapbox.com/styles/v1/{STYLE}/static/{pins}/auto/{SIZE}?access_token={token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64, highlighted: bool) -> MapPoint {
        MapPoint {
            lat,
            lng,
            highlighted,
        }
    }

    #[test]
    fn missing_or_blank_token_shows_the_placeholder() {
        let points = [point(48.8534, 2.3488, false)];
        assert_eq!(
            MapView::from_config(None, &points),
            MapView::Placeholder(MISSING_TOKEN_MESSAGE)
        );
        assert_eq!(
            MapView::from_config(Some("  "), &points),
            MapView::Placeholder(MISSING_TOKEN_MESSAGE)
        );
    }

    #[test]
    fn url_pins_every_point() {
        let points = [point(48.8534, 2.3488, false), point(48.8847, 2.2719, true)];

        let MapView::Image { url } = MapView::from_config(Some("pk.test"), &points) else {
            panic!("a token should produce an image");
        };

        assert_eq!(
            url,
            "https://api.mapbox.com/styles/v1/mapbox/streets-v12/static/\
             pin-s+3b82f6(2.3488,48.8534),pin-s+ef4444(2.2719,48.8847)/auto/600x300?access_token=pk.test"
        );
    }

    #[test]
    fn no_points_centers_on_paris() {
        let url = static_map_url("pk.test", &[]);
        assert!(url.contains("/static/2.3522,48.8566,12/600x300"), "{url}");
    }
}
