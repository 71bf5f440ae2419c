#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use placement_manager::{
    entities::{
        employer::{Employer, NewEmployer, UpdateEmployer},
        evaluation::{Evaluation, NewEvaluation, UpdateEvaluation},
        mentor::{Mentor, NewMentor, UpdateMentor},
        placement::{Placement, PlacementInsert, UpdatePlacement},
        report::PlacementsPerEmployer,
        student::{Student, StudentChanges, StudentInsert},
    },
    errors::AppError,
    repositories::{
        employer::EmployerRepository,
        evaluation::EvaluationRepository,
        mentor::MentorRepository,
        placement::PlacementRepository,
        student::StudentRepository,
    },
    shared_repos::SharedRepositories,
};

/// Tables kept in memory with the same unique, restrict and cascade rules
/// as the Postgres schema.
#[derive(Default)]
struct Tables {
    students: BTreeMap<i64, Student>,
    employers: BTreeMap<i64, Employer>,
    mentors: BTreeMap<i64, Mentor>,
    placements: BTreeMap<i64, Placement>,
    evaluations: BTreeMap<i64, Evaluation>,
    last_id: BTreeMap<&'static str, i64>,
}

impl Tables {
    fn next_id(&mut self, table: &'static str) -> i64 {
        let id = self.last_id.entry(table).or_insert(0);
        *id += 1;
        *id
    }

    fn referenced_by_placement(&self, matches: impl Fn(&Placement) -> bool) -> bool {
        self.placements.values().any(matches)
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories(&self) -> SharedRepositories {
        SharedRepositories {
            student_repo: Arc::new(self.clone()),
            employer_repo: Arc::new(self.clone()),
            mentor_repo: Arc::new(self.clone()),
            placement_repo: Arc::new(self.clone()),
            evaluation_repo: Arc::new(self.clone()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("memory store poisoned")
    }

    pub fn student_count(&self) -> usize {
        self.lock().students.len()
    }

    pub fn placement_count(&self) -> usize {
        self.lock().placements.len()
    }

    pub fn evaluation_count(&self) -> usize {
        self.lock().evaluations.len()
    }

    pub fn password_hash_of(&self, email: &str) -> Option<String> {
        self.lock()
            .students
            .values()
            .find(|s| s.email == email)
            .map(|s| s.password_hash.clone())
    }
}

fn not_found(entity: &str) -> AppError {
    AppError::NotFound(format!("{} not found", entity))
}

#[async_trait]
impl StudentRepository for MemoryStore {
    async fn check_connection(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn student_exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().students.contains_key(&id))
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        Ok(self.lock().students.values().find(|s| s.email == email).cloned())
    }

    async fn create_student(&self, student: &StudentInsert) -> Result<Student, AppError> {
        let mut tables = self.lock();
        if tables.students.values().any(|s| s.email == student.email) {
            return Err(AppError::Conflict("Student with this email already exists".into()));
        }

        let now = Utc::now();
        let row = Student {
            id: tables.next_id("students"),
            full_name: student.full_name.clone(),
            email: student.email.clone(),
            major: student.major.clone(),
            password_hash: student.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.students.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.lock().students.values().cloned().collect())
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(self.lock().students.get(&id).cloned())
    }

    async fn update_student(&self, id: i64, changes: &StudentChanges) -> Result<Student, AppError> {
        let mut tables = self.lock();
        if let Some(email) = &changes.email {
            if tables.students.values().any(|s| &s.email == email && s.id != id) {
                return Err(AppError::Conflict("Student with this email already exists".into()));
            }
        }

        let student = tables.students.get_mut(&id).ok_or_else(|| not_found("Student"))?;
        if let Some(v) = &changes.full_name { student.full_name = v.clone(); }
        if let Some(v) = &changes.email { student.email = v.clone(); }
        if let Some(v) = &changes.major { student.major = v.clone(); }
        if let Some(v) = &changes.password_hash { student.password_hash = v.clone(); }
        student.updated_at = Utc::now();
        Ok(student.clone())
    }

    async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.lock();
        if tables.referenced_by_placement(|p| p.student_id == id) {
            return Err(AppError::Conflict("Student has associated placements".into()));
        }
        tables.students.remove(&id).map(|_| ()).ok_or_else(|| not_found("Student"))
    }
}

#[async_trait]
impl EmployerRepository for MemoryStore {
    async fn employer_exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().employers.contains_key(&id))
    }

    async fn get_employer_by_name(&self, name: &str) -> Result<Option<Employer>, AppError> {
        Ok(self.lock().employers.values().find(|e| e.name == name).cloned())
    }

    async fn create_employer(&self, employer: &NewEmployer) -> Result<Employer, AppError> {
        let mut tables = self.lock();
        if tables.employers.values().any(|e| e.name == employer.name) {
            return Err(AppError::Conflict("Employer with this name already exists".into()));
        }

        let now = Utc::now();
        let row = Employer {
            id: tables.next_id("employers"),
            name: employer.name.clone(),
            industry: employer.industry.clone(),
            website: employer.website.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.employers.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list_employers(&self) -> Result<Vec<Employer>, AppError> {
        Ok(self.lock().employers.values().cloned().collect())
    }

    async fn get_employer_by_id(&self, id: i64) -> Result<Option<Employer>, AppError> {
        Ok(self.lock().employers.get(&id).cloned())
    }

    async fn update_employer(&self, id: i64, changes: &UpdateEmployer) -> Result<Employer, AppError> {
        let mut tables = self.lock();
        if let Some(name) = &changes.name {
            if tables.employers.values().any(|e| &e.name == name && e.id != id) {
                return Err(AppError::Conflict("Employer with this name already exists".into()));
            }
        }

        let employer = tables.employers.get_mut(&id).ok_or_else(|| not_found("Employer"))?;
        if let Some(v) = &changes.name { employer.name = v.clone(); }
        if let Some(v) = &changes.industry { employer.industry = v.clone(); }
        if let Some(v) = &changes.website { employer.website = Some(v.clone()); }
        employer.updated_at = Utc::now();
        Ok(employer.clone())
    }

    async fn delete_employer(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.lock();
        if tables.referenced_by_placement(|p| p.employer_id == id) {
            return Err(AppError::Conflict("Employer has associated placements".into()));
        }
        tables.employers.remove(&id).map(|_| ()).ok_or_else(|| not_found("Employer"))
    }
}

#[async_trait]
impl MentorRepository for MemoryStore {
    async fn mentor_exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().mentors.contains_key(&id))
    }

    async fn get_mentor_by_email(&self, email: &str) -> Result<Option<Mentor>, AppError> {
        Ok(self.lock().mentors.values().find(|m| m.email == email).cloned())
    }

    async fn create_mentor(&self, mentor: &NewMentor) -> Result<Mentor, AppError> {
        let mut tables = self.lock();
        if tables.mentors.values().any(|m| m.email == mentor.email) {
            return Err(AppError::Conflict("Mentor with this email already exists".into()));
        }

        let now = Utc::now();
        let row = Mentor {
            id: tables.next_id("mentors"),
            full_name: mentor.full_name.clone(),
            email: mentor.email.clone(),
            field: mentor.field.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.mentors.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list_mentors(&self) -> Result<Vec<Mentor>, AppError> {
        Ok(self.lock().mentors.values().cloned().collect())
    }

    async fn get_mentor_by_id(&self, id: i64) -> Result<Option<Mentor>, AppError> {
        Ok(self.lock().mentors.get(&id).cloned())
    }

    async fn update_mentor(&self, id: i64, changes: &UpdateMentor) -> Result<Mentor, AppError> {
        let mut tables = self.lock();
        if let Some(email) = &changes.email {
            if tables.mentors.values().any(|m| &m.email == email && m.id != id) {
                return Err(AppError::Conflict("Mentor with this email already exists".into()));
            }
        }

        let mentor = tables.mentors.get_mut(&id).ok_or_else(|| not_found("Mentor"))?;
        if let Some(v) = &changes.full_name { mentor.full_name = v.clone(); }
        if let Some(v) = &changes.email { mentor.email = v.clone(); }
        if let Some(v) = &changes.field { mentor.field = Some(v.clone()); }
        mentor.updated_at = Utc::now();
        Ok(mentor.clone())
    }

    async fn delete_mentor(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.lock();
        if tables.referenced_by_placement(|p| p.mentor_id == id) {
            return Err(AppError::Conflict("Mentor has associated placements".into()));
        }
        tables.mentors.remove(&id).map(|_| ()).ok_or_else(|| not_found("Mentor"))
    }
}

#[async_trait]
impl PlacementRepository for MemoryStore {
    async fn placement_exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().placements.contains_key(&id))
    }

    async fn create_placement(&self, placement: &PlacementInsert) -> Result<Placement, AppError> {
        let mut tables = self.lock();
        let references_exist = tables.students.contains_key(&placement.student_id)
            && tables.employers.contains_key(&placement.employer_id)
            && tables.mentors.contains_key(&placement.mentor_id);
        if !references_exist {
            return Err(AppError::NotFound("Referenced student, employer or mentor not found".into()));
        }

        let now = Utc::now();
        let row = Placement {
            id: tables.next_id("placements"),
            student_id: placement.student_id,
            employer_id: placement.employer_id,
            mentor_id: placement.mentor_id,
            job_title: placement.job_title.clone(),
            description: placement.description.clone(),
            start_date: placement.start_date,
            end_date: placement.end_date,
            status: placement.status.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.placements.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list_placements(&self) -> Result<Vec<Placement>, AppError> {
        Ok(self.lock().placements.values().cloned().collect())
    }

    async fn get_placement_by_id(&self, id: i64) -> Result<Option<Placement>, AppError> {
        Ok(self.lock().placements.get(&id).cloned())
    }

    async fn update_placement(&self, id: i64, changes: &UpdatePlacement) -> Result<Placement, AppError> {
        let mut tables = self.lock();
        let placement = tables.placements.get_mut(&id).ok_or_else(|| not_found("Placement"))?;
        if let Some(v) = &changes.job_title { placement.job_title = v.clone(); }
        if let Some(v) = &changes.description { placement.description = v.clone(); }
        if let Some(v) = changes.start_date { placement.start_date = v; }
        if let Some(v) = changes.end_date { placement.end_date = v; }
        if let Some(v) = &changes.status { placement.status = v.clone(); }
        placement.updated_at = Utc::now();
        Ok(placement.clone())
    }

    async fn delete_placement(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.lock();
        tables.placements.remove(&id).ok_or_else(|| not_found("Placement"))?;
        tables.evaluations.retain(|_, e| e.placement_id != id);
        Ok(())
    }

    async fn placements_per_employer(&self) -> Result<Vec<PlacementsPerEmployer>, AppError> {
        let tables = self.lock();
        let mut rows: Vec<PlacementsPerEmployer> = tables
            .employers
            .values()
            .filter_map(|employer| {
                let count = tables
                    .placements
                    .values()
                    .filter(|p| p.employer_id == employer.id)
                    .count() as i64;
                (count > 0).then(|| PlacementsPerEmployer {
                    employer_id: employer.id,
                    employer_name: employer.name.clone(),
                    placement_count: count,
                })
            })
            .collect();
        rows.sort_by(|a, b| a.employer_name.cmp(&b.employer_name));
        Ok(rows)
    }
}

#[async_trait]
impl EvaluationRepository for MemoryStore {
    async fn create_evaluation(&self, evaluation: &NewEvaluation) -> Result<Evaluation, AppError> {
        let mut tables = self.lock();
        if !tables.placements.contains_key(&evaluation.placement_id) {
            return Err(AppError::NotFound(format!(
                "Placement with ID {} not found",
                evaluation.placement_id
            )));
        }

        let now = Utc::now();
        let row = Evaluation {
            id: tables.next_id("evaluations"),
            placement_id: evaluation.placement_id,
            rating: evaluation.rating,
            comments: evaluation.comments.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.evaluations.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>, AppError> {
        Ok(self.lock().evaluations.values().cloned().collect())
    }

    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>, AppError> {
        Ok(self.lock().evaluations.get(&id).cloned())
    }

    async fn list_evaluations_for_placement(&self, placement_id: i64) -> Result<Vec<Evaluation>, AppError> {
        Ok(self
            .lock()
            .evaluations
            .values()
            .filter(|e| e.placement_id == placement_id)
            .cloned()
            .collect())
    }

    async fn list_evaluations_for_student(&self, student_id: i64) -> Result<Vec<Evaluation>, AppError> {
        let tables = self.lock();
        Ok(tables
            .evaluations
            .values()
            .filter(|e| {
                tables
                    .placements
                    .get(&e.placement_id)
                    .is_some_and(|p| p.student_id == student_id)
            })
            .cloned()
            .collect())
    }

    async fn update_evaluation(&self, id: i64, changes: &UpdateEvaluation) -> Result<Evaluation, AppError> {
        let mut tables = self.lock();
        let evaluation = tables.evaluations.get_mut(&id).ok_or_else(|| not_found("Evaluation"))?;
        if let Some(v) = changes.rating { evaluation.rating = v; }
        if let Some(v) = &changes.comments { evaluation.comments = v.clone(); }
        evaluation.updated_at = Utc::now();
        Ok(evaluation.clone())
    }

    async fn delete_evaluation(&self, id: i64) -> Result<(), AppError> {
        self.lock()
            .evaluations
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found("Evaluation"))
    }
}
