use gloo::net::http::Request;
use shared::{Appointment, AppointmentRequest};

/// API client for communicating with the remote appointment service
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch every appointment the service knows about
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, String> {
        let url = format!("{}/appointments", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Appointment>>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse appointments: {}", e)),
                    }
                } else {
                    Err(format!("Server error {}", response.status()))
                }
            }
            Err(e) => Err(format!("Failed to fetch appointments: {}", e)),
        }
    }

    /// Fetch a single appointment by id
    pub async fn get_appointment(&self, id: i32) -> Result<Appointment, String> {
        let url = format!("{}/appointments/{}", self.base_url, id);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Appointment>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse appointment: {}", e)),
                    }
                } else {
                    Err(format!("Server error {}", response.status()))
                }
            }
            Err(e) => Err(format!("Failed to fetch appointment: {}", e)),
        }
    }

    /// Create a new appointment
    pub async fn create_appointment(&self, request: &AppointmentRequest) -> Result<(), String> {
        let url = format!("{}/appointments", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Replace an existing appointment with a full updated record
    pub async fn update_appointment(&self, id: i32, request: &AppointmentRequest) -> Result<(), String> {
        let url = format!("{}/appointments/{}", self.base_url, id);

        match Request::put(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete an appointment by id
    pub async fn delete_appointment(&self, id: i32) -> Result<(), String> {
        let url = format!("{}/appointments/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
