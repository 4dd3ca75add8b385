//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use alerthub_core::types::{ChallengeId, UserId, VerificationToken, ZoneId};
use alerthub_entity::event::{DisasterType, SeverityLevel};
use alerthub_entity::geo::Coordinates;
use alerthub_service::account::{PreferencesUpdate, ProfileUpdateRequest};
use alerthub_service::account::preferences::WatchZoneInput;

/// Registration request body.
///
/// Carries the solved challenge alongside the credentials; the handler
/// enforces the gate before the directory ever sees the request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Password confirmation; must match `password`.
    pub confirm_password: String,
    /// Email address for alert delivery.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Challenge being answered.
    pub challenge_id: ChallengeId,
    /// Submitted challenge sum.
    pub challenge_answer: u32,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Partial preference update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePreferencesRequest {
    /// Master notification switch.
    pub notifications_enabled: Option<bool>,
    /// Minimum severity for criteria-based alerts.
    pub min_severity: Option<SeverityLevel>,
    /// Hazard types to subscribe to.
    pub subscribed_types: Option<Vec<DisasterType>>,
    /// Full replacement watch-zone list.
    pub watch_zones: Option<Vec<WatchZoneDto>>,
}

/// A watch zone as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WatchZoneDto {
    /// Existing zone id; absent for a newly drawn zone.
    pub id: Option<ZoneId>,
    /// Display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Polygon vertices in draw order.
    pub coordinates: Vec<Coordinates>,
}

impl From<WatchZoneDto> for WatchZoneInput {
    fn from(dto: WatchZoneDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            coordinates: dto.coordinates,
        }
    }
}

impl From<UpdatePreferencesRequest> for PreferencesUpdate {
    fn from(req: UpdatePreferencesRequest) -> Self {
        Self {
            notifications_enabled: req.notifications_enabled,
            min_severity: req.min_severity,
            subscribed_types: req.subscribed_types,
            watch_zones: req
                .watch_zones
                .map(|zones| zones.into_iter().map(Into::into).collect()),
        }
    }
}

/// Sensitive profile update request.
///
/// The challenge fields are required whenever an email or password change
/// is requested; the handler rejects a gateless sensitive change before
/// the directory is involved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Replacement email address.
    pub new_email: Option<String>,
    /// Replacement password (plaintext; hashed server-side).
    pub new_password: Option<String>,
    /// Confirmation of `new_password`.
    pub confirm_password: Option<String>,
    /// Challenge being answered.
    pub challenge_id: Option<ChallengeId>,
    /// Submitted challenge sum.
    pub challenge_answer: Option<u32>,
}

impl UpdateProfileRequest {
    /// Whether the request asks for any sensitive change at all.
    pub fn is_sensitive(&self) -> bool {
        self.new_email.is_some()
            || self
                .new_password
                .as_deref()
                .is_some_and(|password| !password.is_empty())
    }
}

impl From<UpdateProfileRequest> for ProfileUpdateRequest {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            email: req.new_email,
            new_password: req.new_password,
        }
    }
}

/// Challenge answer submission body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeAnswerRequest {
    /// Submitted sum.
    pub answer: u32,
}

/// Query parameters of the confirmation-link endpoint.
///
/// Exactly one of the two fields is present on a real link; both absent
/// or both present simply report no-ops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfirmQuery {
    /// User id from a registration activation link.
    pub verify_user: Option<UserId>,
    /// Token from a pending-update confirmation link.
    pub confirm_update: Option<VerificationToken>,
}
