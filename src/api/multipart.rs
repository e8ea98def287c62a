use rand::distributions::Alphanumeric;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::api_models::NewEvent;

enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

// A multipart/form-data body, isahc only knows about raw bodies
pub struct MultipartForm {
    boundary: String,
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new() -> Self {
        let mut rng = SmallRng::from_entropy();
        let suffix: String = (0..24).map(|_| rng.sample(Alphanumeric) as char).collect();
        Self::with_boundary(format!("huddle-{suffix}"))
    }

    pub fn with_boundary(boundary: String) -> Self {
        Self {
            boundary,
            parts: vec![],
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(Part::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        self.parts.push(Part::File {
            name: name.to_string(),
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        });
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn into_body(self) -> Vec<u8> {
        let Self { boundary, parts } = self;
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            match part {
                Part::Text { name, value } => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", escape(&name))
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                            escape(&name),
                            escape(&file_name),
                            content_type
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(&bytes);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        body
    }
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl From<NewEvent> for MultipartForm {
    fn from(event: NewEvent) -> Self {
        let form = Self::new()
            .text("event[name]", &event.name)
            .text("event[description]", &event.description)
            .text("event[start_time]", &event.start_time)
            .text("event[end_time]", &event.end_time)
            .text("event[location]", &event.location);
        let form = match event.poster {
            Some(poster) => form.file(
                "event[poster]",
                &poster.file_name,
                &poster.content_type,
                poster.bytes,
            ),
            None => form,
        };
        form.text("event[group_id]", &event.group_id.to_string())
    }
}

#[cfg(test)]
pub mod tests {

    use super::*;
    use crate::api::api_models::Poster;

    fn new_event(poster: Option<Poster>) -> NewEvent {
        NewEvent {
            name: "Kickoff".to_string(),
            description: "First meeting".to_string(),
            start_time: "2021-02-01T18:00".to_string(),
            end_time: "2021-02-01T20:00".to_string(),
            location: "Library".to_string(),
            poster,
            group_id: 7,
        }
    }

    #[test]
    fn test_text_part_layout() {
        let body = MultipartForm::with_boundary("XYZ".to_string())
            .text("event[name]", "Kickoff")
            .into_body();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "--XYZ\r\nContent-Disposition: form-data; name=\"event[name]\"\r\n\r\nKickoff\r\n--XYZ--\r\n"
        );
    }

    #[test]
    fn test_event_form_without_poster() {
        let form: MultipartForm = new_event(None).into();
        let body = String::from_utf8(form.into_body()).unwrap();
        for field in [
            "event[name]",
            "event[description]",
            "event[start_time]",
            "event[end_time]",
            "event[location]",
            "event[group_id]",
        ] {
            assert!(body.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
        assert!(!body.contains("event[poster]"));
        assert!(body.contains("\r\n\r\n7\r\n"));
    }

    #[test]
    fn test_event_form_with_poster() {
        let poster = Poster::new("poster.png", vec![0x89, b'P', b'N', b'G']);
        let form: MultipartForm = new_event(Some(poster)).into();
        let body = form.into_body();
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains(
            "name=\"event[poster]\"; filename=\"poster.png\"\r\nContent-Type: image/png\r\n\r\n"
        ));
        assert!(body.windows(4).any(|w| w == [0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_random_boundary() {
        let form = MultipartForm::new();
        let content_type = form.content_type();
        assert!(content_type.starts_with("multipart/form-data; boundary=huddle-"));
        assert_ne!(content_type, MultipartForm::new().content_type());
    }

    #[test]
    fn test_quotes_are_escaped() {
        let body = MultipartForm::with_boundary("B".to_string())
            .file("f", "my \"best\" poster.png", "image/png", vec![])
            .into_body();
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("filename=\"my \\\"best\\\" poster.png\""));
    }
}
