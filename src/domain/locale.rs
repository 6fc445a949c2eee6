use chrono::Weekday;

/// The operator-facing catalogue.
pub fn messages() -> &'static Messages {
    &SPANISH
}

/// Every operator-facing string. Amounts, currency and day names are
/// filled in by the caller.
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub registration_banner: &'static str,
    pub analysis_banner: &'static str,
    pub summary_banner: &'static str,

    pub target_question: &'static str,
    pub target_retry_question: &'static str,
    pub target_error: &'static str,
    pub target_set: &'static str,
    pub sales_for: &'static str,
    pub sales_error: &'static str,
    pub not_a_number_error: &'static str,
    pub too_large_error: &'static str,
    pub sales_recorded: &'static str,
    pub retry: &'static str,
    pub in_currency: &'static str,

    pub metrics_heading: &'static str,
    pub total_sales: &'static str,
    pub daily_mean: &'static str,
    pub days_at_threshold: &'static str,
    pub days_unit: &'static str,
    pub evaluation_heading: &'static str,
    pub target_label: &'static str,
    pub total_achieved: &'static str,
    pub result_label: &'static str,
    pub target_met: &'static str,
    pub target_missed: &'static str,
    pub exceeded_by: &'static str,
    pub short_by: &'static str,

    pub details_heading: &'static str,
    pub threshold_note: &'static str,
    pub week_total: &'static str,
    pub daily_average: &'static str,
    pub objective: &'static str,
    pub final_met: &'static str,
    pub final_missed: &'static str,

    pub days: [&'static str; 7],
}

impl Messages {
    pub fn day_name(&self, day: Weekday) -> &'static str {
        self.days[day.num_days_from_monday() as usize]
    }
}

static SPANISH: Messages = Messages {
    title: "SISTEMA DE ANÁLISIS DE VENTAS",
    registration_banner: "REGISTRO DE VENTAS DIARIAS",
    analysis_banner: "ANÁLISIS DE RESULTADOS",
    summary_banner: "RESUMEN FINAL SEMANAL",

    target_question: "¿Cuál es tu objetivo de ventas para esta semana",
    target_retry_question: "¿Cuál es tu objetivo de ventas?",
    target_error: "Error: El objetivo debe ser un número positivo.",
    target_set: "Objetivo establecido:",
    sales_for: "Ventas del",
    sales_error: "Error: Las ventas no pueden ser negativas.",
    not_a_number_error: "Error: Introduce un número válido.",
    too_large_error: "Error: El importe es demasiado grande.",
    sales_recorded: "Ventas registradas correctamente",
    retry: "Intenta de nuevo.",
    in_currency: "en",

    metrics_heading: "MÉTRICAS CALCULADAS:",
    total_sales: "Total de ventas:",
    daily_mean: "Media diaria:",
    days_at_threshold: "Días con ventas >=",
    days_unit: "días",
    evaluation_heading: "EVALUACIÓN DEL OBJETIVO:",
    target_label: "Objetivo establecido:",
    total_achieved: "Total logrado:",
    result_label: "Resultado:",
    target_met: "OBJETIVO ALCANZADO",
    target_missed: "OBJETIVO NO ALCANZADO",
    exceeded_by: "Superaste en:",
    short_by: "Te falta:",

    details_heading: "Detalles por día:",
    threshold_note: "Ventas en el umbral declarado",
    week_total: "TOTAL SEMANA:",
    daily_average: "PROMEDIO DIARIO:",
    objective: "OBJETIVO:",
    final_met: "¡Objetivo cumplido!",
    final_missed: "El objetivo no se ha cumplido",

    days: [
        "Lunes",
        "Martes",
        "Miércoles",
        "Jueves",
        "Viernes",
        "Sábado",
        "Domingo",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::WEEK;

    #[test]
    fn test_day_names_follow_week_order() {
        let names: Vec<_> = WEEK.iter().map(|d| messages().day_name(*d)).collect();
        assert_eq!(
            names,
            ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"]
        );
        assert_eq!(messages().day_name(Weekday::Sun), "Domingo");
    }
}
