use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxStudentRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEmployerRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxMentorRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxPlacementRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEvaluationRepo {
    pub pool: PgPool,
}
