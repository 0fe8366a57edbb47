use async_trait::async_trait;
use mockall::mock;
use salon_core::{
    errors::SalonResult,
    models::{
        appointment::{AppointmentDetail, AppointmentRequest},
        style::Style,
    },
    store::AppointmentStore,
};

// Mock store for exercising the HTTP layer without a database
mock! {
    pub Store {}

    #[async_trait]
    impl AppointmentStore for Store {
        async fn book_appointment(&self, request: AppointmentRequest) -> SalonResult<i64>;

        async fn list_appointments(&self) -> SalonResult<Vec<AppointmentDetail>>;

        async fn list_styles(&self) -> SalonResult<Vec<Style>>;

        async fn update_appointment(
            &self,
            id: i64,
            request: AppointmentRequest,
        ) -> SalonResult<()>;

        async fn delete_appointment(&self, id: i64) -> SalonResult<()>;
    }
}
