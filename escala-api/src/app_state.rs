use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    domain::ScheduleService,
    repositories::{
        EmployeeRepositoryImpl, HolidayRepositoryImpl, ScheduleRepositoryImpl,
        ShiftTypeRepositoryImpl, UnitRepositoryImpl, VacationRepositoryImpl,
    },
};

pub type PgScheduleService = ScheduleService<
    ScheduleRepositoryImpl,
    UnitRepositoryImpl,
    EmployeeRepositoryImpl,
    ShiftTypeRepositoryImpl,
>;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub schedule_service: Arc<PgScheduleService>,
    pub unit_repo: Arc<UnitRepositoryImpl>,
    pub employee_repo: Arc<EmployeeRepositoryImpl>,
    pub shift_type_repo: Arc<ShiftTypeRepositoryImpl>,
    pub holiday_repo: Arc<HolidayRepositoryImpl>,
    pub vacation_repo: Arc<VacationRepositoryImpl>,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        let schedule_repo = Arc::new(ScheduleRepositoryImpl::new(db_pool.clone()));
        let unit_repo = Arc::new(UnitRepositoryImpl::new(db_pool.clone()));
        let employee_repo = Arc::new(EmployeeRepositoryImpl::new(db_pool.clone()));
        let shift_type_repo = Arc::new(ShiftTypeRepositoryImpl::new(db_pool.clone()));

        let schedule_service = Arc::new(ScheduleService::new(
            schedule_repo,
            unit_repo.clone(),
            employee_repo.clone(),
            shift_type_repo.clone(),
        ));

        Self {
            schedule_service,
            unit_repo,
            employee_repo,
            shift_type_repo,
            holiday_repo: Arc::new(HolidayRepositoryImpl::new(db_pool.clone())),
            vacation_repo: Arc::new(VacationRepositoryImpl::new(db_pool.clone())),
            db_pool: Arc::new(db_pool),
        }
    }
}
