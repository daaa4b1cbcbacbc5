//! Interactive terminal chat loop.

use std::io::Write as _;

use neurobuddy_chat::{render_turn_text, IgnoreReason, Role, SubmitOutcome, TurnCoordinator};

const MISSING_KEY_BANNER: &str = "No hay sesión de chat: define la variable de entorno \
GEMINI_API_KEY y vuelve a iniciar NeuroBuddy.";

/// Read questions from stdin until EOF or `:q`.
pub async fn run(coordinator: &mut TurnCoordinator) {
    print_welcome();
    if !coordinator.has_session() {
        println!("\n{MISSING_KEY_BANNER}");
    }

    let stdin = std::io::stdin();
    loop {
        print!("\n> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("stdin read failed: {e}");
                break;
            }
        }

        let input = line.trim();
        if input == ":q" || input == ":quit" {
            break;
        }
        submit_and_print(coordinator, input).await;
    }
}

/// One-shot mode: submit a single question and print the answer.
pub async fn ask_once(coordinator: &mut TurnCoordinator, question: &str) {
    submit_and_print(coordinator, question).await;
}

async fn submit_and_print(coordinator: &mut TurnCoordinator, input: &str) {
    if !input.trim().is_empty() && coordinator.has_session() {
        println!("NeuroBuddy está pensando...");
    }

    match coordinator.submit(input).await {
        SubmitOutcome::Answered | SubmitOutcome::Recovered => {
            if let Some(turn) = coordinator.turns().last() {
                if turn.role == Role::Model {
                    println!("\nNeuroBuddy:\n{}", render_turn_text(turn));
                }
            }
            if let Some(detail) = coordinator.last_error() {
                eprintln!("(detalle del error: {detail})");
            }
        }
        SubmitOutcome::Ignored(IgnoreReason::EmptyInput) => {}
        SubmitOutcome::Ignored(IgnoreReason::NoSession) => println!("{MISSING_KEY_BANNER}"),
        SubmitOutcome::Ignored(IgnoreReason::Busy) => {
            println!("Espera la respuesta anterior antes de enviar otra pregunta.");
        }
    }
}

fn print_welcome() {
    println!("¡Hola! Soy NeuroBuddy.");
    println!("Tu asistente experto en los 12 pares craneales. Pregúntame algo como:");
    println!("  \"¿Qué función tiene el Nervio Vago?\"");
    println!("  \"¿Cuál es el foramen de salida del Trigémino?\"");
    println!("  \"Lista los nervios puramente motores\"");
    println!("(escribe :q para salir)");
}
