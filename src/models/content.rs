// Contenido editorial: noticias, radio, turismo, historia, etc.

use serde::{Deserialize, Serialize};

use super::ApprovalStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: i64,
    pub image_url: String,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialPlatform {
    Instagram,
    YouTube,
    Facebook,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub platform: SocialPlatform,
    pub followers: String,
    pub image_url: String,
    pub profile_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalEventType {
    Movie,
    Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalEvent {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: LocalEventType,
    pub location: String,
    pub date: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: String,
    pub title: String,
    pub number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryIcon {
    Fort,
    War,
    Ruler,
    Train,
    Industry,
    Agri,
    Govt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    pub id: String,
    pub year: String,
    pub title: String,
    pub description: String,
    pub icon_type: HistoryIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourismSpotType {
    Temple,
    Fort,
    Nature,
    Landmark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourismSpot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TourismSpotType,
    pub description: String,
    pub location: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub temp: f64,
    pub condition: WeatherCondition,
    pub humidity: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlidePage {
    Home,
    History,
    Tourism,
    Jobs,
    Freelancers,
    Realestate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub active: bool,
    pub page: SlidePage,
}

/// Programa de la radio local (/fm)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FmProgram {
    pub id: String,
    pub time: String,
    pub title: String,
    pub host: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub status: ApprovalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_icon_and_event_type_use_stored_literals() {
        let event: HistoryEvent = serde_json::from_value(serde_json::json!({
            "id": "h1",
            "year": "1850",
            "title": "Railway line",
            "description": "",
            "iconType": "train"
        }))
        .unwrap();
        assert_eq!(event.icon_type, HistoryIcon::Train);
        assert!(event.image_url.is_none());

        let local: LocalEvent = serde_json::from_value(serde_json::json!({
            "id": "e1",
            "title": "Ugadi fair",
            "type": "Event",
            "location": "Temple grounds",
            "date": "2024-04-09",
            "imageUrl": ""
        }))
        .unwrap();
        assert_eq!(local.kind, LocalEventType::Event);
    }

    #[test]
    fn unknown_weather_condition_is_rejected() {
        let result = serde_json::from_value::<WeatherData>(serde_json::json!({
            "temp": 31.0,
            "condition": "Snowy",
            "humidity": 40.0,
            "windSpeed": 12.0
        }));
        assert!(result.is_err());
    }
}
