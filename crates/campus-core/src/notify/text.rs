//! Textos del snackbar: mensaje por acción, formato de fechas y línea de
//! invitados notificados.

use campus_domain::Event;
use chrono::NaiveDateTime;

use crate::change::ChangeAction;

/// Mensaje fijo mostrado tras deshacer.
pub const UNDO_MESSAGE: &str = "Undid last change";

/// Fecha estilo "November 3, 2025".
pub fn format_snackbar_date(dt: NaiveDateTime) -> String {
    dt.format("%B %-d, %Y").to_string()
}

/// Hora estilo "2:30 pm".
pub fn format_snackbar_time(dt: NaiveDateTime) -> String {
    dt.format("%-I:%M %P").to_string()
}

/// Mensaje del snackbar para un cambio aplicado. Reschedule sin `after`
/// cae al genérico "Event updated".
pub fn snackbar_message(action: ChangeAction, after: Option<&Event>) -> String {
    match (action, after) {
        (ChangeAction::Reschedule, Some(after)) => format!(
            "Event rescheduled to {}, {}",
            format_snackbar_date(after.start()),
            format_snackbar_time(after.start())
        ),
        (ChangeAction::Create, _) => "Event created".to_string(),
        (ChangeAction::Edit, _) => "Event saved".to_string(),
        (ChangeAction::Delete, _) => "Event deleted".to_string(),
        (ChangeAction::Reschedule, None) => "Event updated".to_string(),
    }
}

/// Línea "Notified Alice, Bob" a partir de la lista unida por comas; cadena
/// vacía si no hay invitados.
pub fn format_invitee_notification(invite: &str) -> String {
    let names: Vec<&str> = invite.split(',').map(|n| n.trim()).filter(|n| !n.is_empty()).collect();
    if names.is_empty() {
        return String::new();
    }
    format!("Notified {}", names.join(", "))
}

/// Rango horario de un evento: "9:00 am – 10:30 am" en el mismo día, o
/// "Oct 6 9:00 pm – Oct 7 1:00 am" si cruza de día. Sin `end` se muestra
/// solo la hora de inicio.
pub fn format_event_time_range(start: NaiveDateTime, end: Option<NaiveDateTime>) -> String {
    let time = |d: NaiveDateTime| d.format("%-I:%M %P").to_string();

    let Some(end) = end else {
        return time(start);
    };

    if start.date() == end.date() {
        return format!("{} – {}", time(start), time(end));
    }

    format!("{} {} – {} {}", start.format("%b %-d"), time(start), end.format("%b %-d"), time(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    #[test]
    fn snackbar_date_long_month() {
        assert_eq!(format_snackbar_date(dt(2025, 11, 3, 14, 30)), "November 3, 2025");
    }

    #[test]
    fn snackbar_time_twelve_hour() {
        assert_eq!(format_snackbar_time(dt(2025, 11, 3, 14, 30)), "2:30 pm");
        assert_eq!(format_snackbar_time(dt(2025, 11, 3, 0, 5)), "12:05 am");
        assert_eq!(format_snackbar_time(dt(2025, 11, 3, 12, 0)), "12:00 pm");
    }

    #[test]
    fn invitee_line_skips_blank_names() {
        assert_eq!(format_invitee_notification("Alice, , Bob"), "Notified Alice, Bob");
        assert_eq!(format_invitee_notification("  "), "");
        assert_eq!(format_invitee_notification(""), "");
    }

    #[test]
    fn time_range_same_day_and_cross_day() {
        assert_eq!(format_event_time_range(dt(2025, 10, 6, 9, 0), Some(dt(2025, 10, 6, 10, 30))), "9:00 am – 10:30 am");
        assert_eq!(format_event_time_range(dt(2025, 10, 6, 21, 0), Some(dt(2025, 10, 7, 1, 0))), "Oct 6 9:00 pm – Oct 7 1:00 am");
        assert_eq!(format_event_time_range(dt(2025, 10, 6, 9, 0), None), "9:00 am");
    }
}
