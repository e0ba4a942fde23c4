use std::fmt;

use anyhow::{anyhow, Context};
use derivative::Derivative;
use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::animation::custom_animation::AnimationPayload;
use crate::util::auth::AuthToken;
use crate::util::config::DeviceConfig;
use crate::util::traits::{ResponseCode, ResponseCodeTrait};

#[derive(Debug, Clone)]
pub struct NanoLeafClient {
    config: DeviceConfig,
    auth_token: String,
    client: Client,
}

/**
Compare the device configuration only. The HTTP client is a utility, and the token
does not describe the device.
 */
impl PartialEq for NanoLeafClient {
    fn eq(&self, other: &NanoLeafClient) -> bool {
        self.config == other.config
    }
}

/// The status and body of a state changing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceResponse {
    pub status: u16,
    pub body: String,
}

impl ResponseCodeTrait for DeviceResponse {
    fn response_code(&self) -> ResponseCode {
        Self::map_response_code(self.status)
    }
}

impl fmt::Display for DeviceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Response [{}]>", self.status)?;
        if !self.body.is_empty() {
            write!(f, " {}", self.body)?;
        }
        Ok(())
    }
}

impl NanoLeafClient {
    /// Creates a client, reading the auth token from `config.auth_path`.
    pub fn new(config: DeviceConfig) -> anyhow::Result<Self> {
        let auth_token = AuthToken::load(&config.auth_path)?.auth_token;
        Ok(Self::with_auth_token(config, auth_token))
    }

    pub fn with_auth_token(config: DeviceConfig, auth_token: String) -> Self {
        NanoLeafClient {
            config,
            auth_token,
            client: Client::new(),
        }
    }

    /// Asks the device for a new auth token.
    ///
    /// The device only hands out tokens for about 30 seconds after its power
    /// button has been held for 5-7 seconds.
    pub async fn request_token(config: &DeviceConfig) -> anyhow::Result<AuthToken> {
        let url = format!("{}/api/v1/new", config.base_url());
        debug!("POST {}", url);
        let response = Client::new()
            .post(&url)
            .send()
            .await
            .context("Failed to request auth token")?;

        match response.status() {
            StatusCode::OK => response
                .json::<AuthToken>()
                .await
                .context("Failed to deserialize auth token response"),
            StatusCode::FORBIDDEN => Err(anyhow!(
                "Device refused to pair, hold the power button for 5-7 seconds and retry"
            )),
            status => Err(status_error("request auth token", status)),
        }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    fn v1_url(&self, uri: &str) -> String {
        format!("{}/api/v1/{}{}", self.config.base_url(), self.auth_token, uri)
    }

    async fn v1_get(&self, uri: &str, action: &str) -> anyhow::Result<Response> {
        debug!("GET {}/api/v1/<token>{}", self.config.base_url(), uri);
        let response = self
            .client
            .get(self.v1_url(uri))
            .send()
            .await
            .with_context(|| format!("Failed to {}", action))?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(status_error(action, response.status()))
        }
    }

    async fn v1_put<T: Serialize + ?Sized>(
        &self,
        uri: &str,
        body: &T,
        action: &str,
    ) -> anyhow::Result<DeviceResponse> {
        debug!("PUT {}/api/v1/<token>{}", self.config.base_url(), uri);
        let response = self
            .client
            .put(self.v1_url(uri))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to {}", action))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(action, status));
        }
        let body = response.text().await?;
        Ok(DeviceResponse {
            status: status.as_u16(),
            body,
        })
    }

    /// Fetches the full device description, including the panel layout.
    pub async fn get_info(&self) -> anyhow::Result<DeviceInfo> {
        self.v1_get("/", "fetch device info")
            .await?
            .json::<DeviceInfo>()
            .await
            .context("Failed to deserialize device info")
    }

    pub async fn get_info_raw(&self) -> anyhow::Result<serde_json::Value> {
        Ok(self.v1_get("/", "fetch device info").await?.json().await?)
    }

    pub async fn get_state(&self) -> anyhow::Result<BoolValue> {
        Ok(self.v1_get("/state/on", "get state").await?.json().await?)
    }

    /// Brightness, range 0..100.
    pub async fn get_brightness(&self) -> anyhow::Result<RangeValue> {
        Ok(self
            .v1_get("/state/brightness", "get brightness")
            .await?
            .json()
            .await?)
    }

    /// Hue, range 0..360.
    pub async fn get_hue(&self) -> anyhow::Result<RangeValue> {
        Ok(self.v1_get("/state/hue", "get hue").await?.json().await?)
    }

    /// Color temperature in Kelvin, range 1200..6500.
    pub async fn get_ct(&self) -> anyhow::Result<RangeValue> {
        Ok(self.v1_get("/state/ct", "get color temperature").await?.json().await?)
    }

    /// Name of the effect currently playing.
    pub async fn get_effect(&self) -> anyhow::Result<String> {
        Ok(self
            .v1_get("/effects/select", "get current effect")
            .await?
            .json()
            .await?)
    }

    pub async fn get_effects(&self) -> anyhow::Result<Vec<String>> {
        Ok(self
            .v1_get("/effects/effectsList", "list effects")
            .await?
            .json()
            .await?)
    }

    pub async fn put_state(&self, on: bool) -> anyhow::Result<DeviceResponse> {
        self.v1_put("/state", &json!({ "on": { "value": on } }), "set state")
            .await
    }

    /// Sets the brightness.
    ///
    /// # Arguments
    /// - `value`: Range is 0..100.
    /// - `duration`: Seconds over which to fade to the new brightness.
    pub async fn put_brightness(
        &self,
        value: u8,
        duration: Option<u32>,
    ) -> anyhow::Result<DeviceResponse> {
        let mut brightness = json!({ "value": value });
        if let Some(duration) = duration {
            brightness["duration"] = json!(duration);
        }
        self.v1_put("/state", &json!({ "brightness": brightness }), "set brightness")
            .await
    }

    pub async fn put_hue(&self, value: u16) -> anyhow::Result<DeviceResponse> {
        self.v1_put("/state", &json!({ "hue": { "value": value } }), "set hue")
            .await
    }

    pub async fn put_ct(&self, value: u16) -> anyhow::Result<DeviceResponse> {
        self.v1_put(
            "/state",
            &json!({ "ct": { "value": value } }),
            "set color temperature",
        )
        .await
    }

    pub async fn select_effect(&self, effect_name: &str) -> anyhow::Result<DeviceResponse> {
        self.v1_put("/effects", &json!({ "select": effect_name }), "select effect")
            .await
    }

    pub async fn delete_effect(&self, effect_name: &str) -> anyhow::Result<DeviceResponse> {
        let payload = json!({
            "write": { "command": "delete", "animName": effect_name }
        });
        self.v1_put("/effects", &payload, "delete effect").await
    }

    /// Writes a custom effect, wrapped as `{"write": payload}`.
    pub async fn write_effect(
        &self,
        effect_payload: &AnimationPayload,
    ) -> anyhow::Result<DeviceResponse> {
        self.v1_put(
            "/effects",
            &WriteRequest {
                write: effect_payload,
            },
            "write effect",
        )
        .await
    }
}

fn status_error(action: &str, status: StatusCode) -> anyhow::Error {
    let code = ResponseCode::from_status(status.as_u16());
    anyhow!(
        "Failed to {} with status: {} ({})",
        action,
        status.as_u16(),
        code.message
    )
}

#[derive(Serialize, Debug)]
struct WriteRequest<'a> {
    write: &'a AnimationPayload,
}

/// A `{"value": ...}` boolean state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolValue {
    pub value: bool,
}

/// A `{"value", "max", "min"}` state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeValue {
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
}

/// One entry of `panelLayout.layout.positionData`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub panel_id: u16,
    pub x: i32,
    pub y: i32,
    /// Orientation in degrees.
    #[serde(default)]
    pub o: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    #[serde(default)]
    pub num_panels: usize,
    #[serde(default)]
    pub side_length: u32,
    pub position_data: Vec<Tile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanelLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_orientation: Option<RangeValue>,
    pub layout: LayoutData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EffectsInfo {
    #[serde(default)]
    pub select: Option<String>,
    #[serde(default)]
    pub effects_list: Vec<String>,
}

// Define a struct to deserialize the device information response
#[derive(Derivative)]
#[derivative(PartialEq)]
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub serial_no: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub firmware_version: String,
    #[serde(default)]
    pub model: String,

    // Ignore state and the current effect for partial-equal, they change while the device stays the same.
    #[derivative(PartialEq = "ignore")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<serde_json::Value>,
    #[derivative(PartialEq = "ignore")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<EffectsInfo>,

    pub panel_layout: PanelLayout,
}
