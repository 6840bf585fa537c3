//! Decoding of the analysis form.
//!
//! Both `application/x-www-form-urlencoded` and `multipart/form-data` bodies
//! are accepted. A field sent with an empty value counts as absent, so
//! optional fields fall back to their defaults and required fields fail.

use crate::error::ApiError;
use axum::extract::{Form, FromRequest, Multipart, Request};
use axum::http::header;
use cyclesense_advisor::UserObservation;
use std::collections::HashMap;
use std::str::FromStr;

/// Extractor yielding the observation posted to the analysis endpoint.
#[derive(Debug)]
pub struct ObservationForm(pub UserObservation);

impl<S> FromRequest<S> for ObservationForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        let fields = if is_multipart {
            multipart_fields(Multipart::from_request(req, state).await.map_err(|r| {
                ApiError::InvalidForm(r.body_text())
            })?)
            .await?
        } else {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|r| ApiError::InvalidForm(r.body_text()))?;
            fields
        };

        parse_observation(fields).map(Self)
    }
}

async fn multipart_fields(mut multipart: Multipart) -> Result<Vec<(String, String)>, ApiError> {
    let mut fields = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidForm(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| ApiError::InvalidForm(e.body_text()))?;
        fields.push((name, value));
    }
    Ok(fields)
}

/// Builds an observation from raw form fields.
///
/// Later occurrences of a field win. Unknown fields are ignored.
pub fn parse_observation<I>(fields: I) -> Result<UserObservation, ApiError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut fields: HashMap<String, String> = fields
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();

    let phase = fields.remove("phase").ok_or_else(|| missing("phase"))?;
    let pain_level = number(&mut fields, "pain_level")?.ok_or_else(|| missing("pain_level"))?;
    let mut observation = UserObservation::new(phase, pain_level);

    if let Some(flow) = fields.remove("flow_intensity") {
        observation.flow_intensity = flow;
    }
    if let Some(mood) = fields.remove("mood") {
        observation.mood = mood;
    }
    if let Some(hours) = number(&mut fields, "sleep_hours")? {
        observation.sleep_hours = hours;
    }
    if let Some(level) = fields.remove("fatigue") {
        observation.fatigue = level.into();
    }
    if let Some(level) = fields.remove("headaches") {
        observation.headaches = level.into();
    }
    if let Some(level) = fields.remove("bloating") {
        observation.bloating = level.into();
    }
    if let Some(day) = number(&mut fields, "day_in_cycle")? {
        observation.day_in_cycle = day;
    }
    if let Some(age) = number(&mut fields, "age")? {
        observation.age = age;
    }
    if let Some(contraception) = fields.remove("contraception_type") {
        observation.contraception_type = contraception;
    }

    Ok(observation)
}

fn number<T>(fields: &mut HashMap<String, String>, name: &str) -> Result<Option<T>, ApiError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    fields
        .remove(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| ApiError::InvalidForm(format!("{name}: {e}")))
        })
        .transpose()
}

fn missing(name: &str) -> ApiError {
    ApiError::InvalidForm(format!("{name}: field required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclesense_advisor::Severity;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_only() {
        let obs = parse_observation(fields(&[("phase", "luteal"), ("pain_level", "4")])).unwrap();
        assert_eq!(obs, UserObservation::new("luteal", 4));
    }

    #[test]
    fn test_blank_optional_fields_use_defaults() {
        let obs = parse_observation(fields(&[
            ("phase", "luteal"),
            ("pain_level", "0"),
            ("fatigue", ""),
            ("day_in_cycle", ""),
            ("sleep_hours", ""),
            ("flow_intensity", ""),
        ]))
        .unwrap();
        assert_eq!(obs.fatigue, Severity::Medium);
        assert_eq!(obs.day_in_cycle, 15);
        assert_eq!(obs.sleep_hours, 7.0);
        assert_eq!(obs.flow_intensity, "moderate");
    }

    #[test]
    fn test_blank_phase_is_missing() {
        let err = parse_observation(fields(&[("phase", ""), ("pain_level", "2")])).unwrap_err();
        assert!(err.detail().unwrap().starts_with("phase"));
    }

    #[test]
    fn test_blank_pain_level_is_missing() {
        let err = parse_observation(fields(&[("phase", "luteal"), ("pain_level", "")])).unwrap_err();
        assert!(err.detail().unwrap().contains("field required"));
    }

    #[test]
    fn test_bad_number_names_field() {
        let err = parse_observation(fields(&[
            ("phase", "luteal"),
            ("pain_level", "3"),
            ("day_in_cycle", "soon"),
        ]))
        .unwrap_err();
        assert!(err.detail().unwrap().starts_with("day_in_cycle:"));
    }

    #[test]
    fn test_negative_age_accepted() {
        let obs = parse_observation(fields(&[
            ("phase", "luteal"),
            ("pain_level", "3"),
            ("age", "-1"),
        ]))
        .unwrap();
        assert_eq!(obs.age, -1);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let obs = parse_observation(fields(&[
            ("phase", "follicular"),
            ("phase", "luteal"),
            ("pain_level", "1"),
            ("unknown", "ignored"),
        ]))
        .unwrap();
        assert_eq!(obs.phase, "luteal");
    }
}
