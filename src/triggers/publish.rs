//! Polling trigger for new videos in a project: ten most recent media,
//! newest first, returned verbatim so the host can diff against IDs it has
//! already seen.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::request::{ApiRequest, WistiaClient};
use crate::error::{Result, WistiaError};
use crate::fields::{Display, FieldDef, FieldType, TriggerDescriptor};
use crate::models::models::{Bundle, Video};

const PER_PAGE: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishInput {
    pub project_id: String,
}

pub async fn perform(client: &WistiaClient, bundle: &Bundle<PublishInput>) -> Result<Vec<Video>> {
    let request = ApiRequest::get("/medias")
        .param("tag", &bundle.input_data.project_id)
        .param("per_page", PER_PAGE)
        .param("sort_by", "created")
        .param("sort_direction", "desc");
    let response = client.request(request, bundle.credentials()).await?;

    // Provider-side errors surface as-is; an empty or unknown project is an
    // empty page, not a failure.
    if !response.is_success() {
        return Err(WistiaError::Remote(format!(
            "Wistia returned status {}: {}",
            response.status.as_u16(),
            response.body
        )));
    }

    response.json()
}

pub static TRIGGER: Lazy<TriggerDescriptor> = Lazy::new(|| TriggerDescriptor {
    key: "publish",
    noun: "Publish",
    display: Display {
        label: "New Video in Project",
        description: "Triggers when a new video publish is added to a Wistia project.",
    },
    input_fields: &[FieldDef {
        key: "project_id",
        label: "Project ID",
        field_type: FieldType::String,
        required: true,
        help_text: Some("Select the Wistia project to monitor for new videos."),
        dynamic: Some("projects.id"),
    }],
    output_fields: &[
        FieldDef {
            key: "id",
            label: "Video ID",
            field_type: FieldType::Number,
            required: false,
            help_text: None,
            dynamic: None,
        },
        FieldDef {
            key: "name",
            label: "Video Name",
            field_type: FieldType::String,
            required: false,
            help_text: None,
            dynamic: None,
        },
        FieldDef {
            key: "duration",
            label: "Duration (seconds)",
            field_type: FieldType::Number,
            required: false,
            help_text: None,
            dynamic: None,
        },
        FieldDef {
            key: "description",
            label: "Description",
            field_type: FieldType::String,
            required: false,
            help_text: None,
            dynamic: None,
        },
    ],
    sample: json!({
        "id": 138085539,
        "hashed_id": "lj5p4p3yzw",
        "progress": 1,
        "type": "Video",
        "archived": false,
        "name": "Clip 1 (Camera)",
        "duration": 2.73333,
        "created": "2025-09-05T13:11:20+00:00",
        "updated": "2025-09-05T13:11:44+00:00",
        "description": "",
        "status": "ready",
        "thumbnail": {
            "url": "https://embed-ssl.wistia.com/deliveries/14fe023bbafa428d4de73481c37e34fa05aeeb79.jpg?image_crop_resized=200x120",
            "width": 200,
            "height": 120
        },
        "assets": [
            {
                "width": 1280,
                "height": 720,
                "type": "OriginalFile",
                "fileSize": 1250834,
                "contentType": "video/webm",
                "url": "http://embed.wistia.com/deliveries/395ec90f8a7f9ecfb855b2985d603254.bin"
            },
            {
                "width": 1280,
                "height": 720,
                "type": "HdMp4VideoFile",
                "fileSize": 1438112,
                "contentType": "video/mp4",
                "url": "http://embed.wistia.com/deliveries/8dbad18401f6be8b6bf24c4f201920d823c54435.bin"
            },
            {
                "width": 960,
                "height": 540,
                "type": "MdMp4VideoFile",
                "fileSize": 674410,
                "contentType": "video/mp4",
                "url": "http://embed.wistia.com/deliveries/20e99dcf192cd92ae64ff587facdaf3e06811965.bin"
            },
            {
                "width": 1280,
                "height": 720,
                "type": "StillImageFile",
                "fileSize": 1291238,
                "contentType": "image/jpg",
                "url": "http://embed.wistia.com/deliveries/14fe023bbafa428d4de73481c37e34fa05aeeb79.bin"
            },
            {
                "width": 2000,
                "height": 112,
                "type": "StoryboardFile",
                "fileSize": 27774,
                "contentType": "image/jpg",
                "url": "http://embed.wistia.com/deliveries/c1a8c30c0ea5f61f425ff54b8d9b0400c413d01c.bin"
            }
        ]
    }),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_deserializes_into_video() {
        let video: Video = serde_json::from_value(TRIGGER.sample.clone()).unwrap();
        assert_eq!(video.id, 138085539);
        assert_eq!(video.hashed_id, "lj5p4p3yzw");
        assert_eq!(video.status, "ready");
        assert_eq!(video.assets.len(), 5);
        assert_eq!(video.assets[0].asset_type, "OriginalFile");
        assert_eq!(video.thumbnail.as_ref().unwrap().width, 200);
    }

    #[test]
    fn project_field_is_backed_by_projects_dropdown() {
        let field = &TRIGGER.input_fields[0];
        assert_eq!(field.key, "project_id");
        assert!(field.required);
        assert_eq!(field.dynamic, Some("projects.id"));
    }
}
