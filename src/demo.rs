// src/demo.rs
use crate::model::{JobId, JobPosting};

/// Fixed fallback dataset shown when the live endpoint is unreachable and
/// the deployment runs the `demo` fallback policy. Content mirrors what the
/// live aggregator serves so the filter UI stays exercisable offline.
pub fn demo_postings() -> Vec<JobPosting> {
    vec![
        JobPosting::new(
            JobId::Number(1),
            "Planner Estratégico (Modo Demo)",
            "Servidor en espera",
        )
        .with_location("Santiago")
        .with_category("Planner")
        .with_salary("Revisar conexión")
        .with_source("SISTEMA")
        .with_link("#")
        .with_days_ago(0),
        JobPosting::new(JobId::Number(2), "Demand Planner Senior", "Nestlé Chile")
            .with_location("Santiago, RM")
            .with_category("Planner")
            .with_salary("$2.200.000 - $2.600.000")
            .with_source("LINKEDIN")
            .with_requirements(&[
                "3+ años en planificación de demanda",
                "Manejo avanzado de Excel y SAP APO",
            ])
            .with_link("#")
            .with_days_ago(1)
            .with_hot(true),
        JobPosting::new(JobId::Number(3), "Product Manager Abarrotes", "Walmart Chile")
            .with_location("Quilicura")
            .with_category("Product Manager")
            .with_source("GETONBRD")
            .with_link("#")
            .with_days_ago(2),
        JobPosting::new(JobId::Number(4), "Analista CPFR", "Cencosud")
            .with_location("Valparaíso")
            .with_category("CPFR")
            .with_source("TRABAJANDO")
            .with_requirements(&["Experiencia en retail", "Inglés intermedio"])
            .with_link("#")
            .with_days_ago(4),
    ]
}
