//! Console front-end - the stand-in for the browser event loop.
//!
//! One command per toolbar action of the panel. Each command collects the
//! same fields its modal collected, hands off to the application shell, and
//! prints the rendered markup plus any toast. Handlers run to completion;
//! nothing here is cancellable once issued.

use crate::{
    app::App,
    confirm::DestructiveAction,
    errors::Result,
    notify::ToastKind,
    view::render_options,
};
use std::path::PathBuf;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type InputLines = Lines<BufReader<Stdin>>;

const HELP_TEXT: &str = "\
Perintah yang tersedia:
  list                 Muat ulang dan tampilkan seluruh data mesin
  search <kata>        Cari berdasarkan pengelola, periode PM, atau status
  new                  Tambah mesin baru
  edit                 Ubah alamat/pengelola/teknisi sebuah mesin
  update-pm            Atur periode PM sebuah mesin
  complete-pm          Catat tanggal selesai PM
  notes <id_msn>       Lihat dan ubah notes sebuah mesin
  delete-pm            Hapus data PM sebuah mesin (dengan konfirmasi)
  delete-all           Hapus seluruh data sebuah mesin (dengan konfirmasi)
  import <file>        Import data dari spreadsheet
  export               Export tabel ke PDF
  help                 Tampilkan bantuan ini
  quit                 Keluar";

async fn prompt(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    use std::io::Write;
    print!("{label}");
    std::io::stdout().flush()?;
    Ok(lines
        .next_line()
        .await?
        .map(|line| line.trim().to_string()))
}

async fn read_field(lines: &mut InputLines, label: &str) -> Result<String> {
    Ok(prompt(lines, label).await?.unwrap_or_default())
}

/// Reads a field, keeping the pre-filled value when the user just presses
/// enter.
async fn read_field_with_default(
    lines: &mut InputLines,
    label: &str,
    current: &str,
) -> Result<String> {
    let value = read_field(lines, &format!("{label} [{current}]: ")).await?;
    Ok(if value.is_empty() {
        current.to_string()
    } else {
        value
    })
}

async fn read_yes(lines: &mut InputLines, question: &str) -> Result<bool> {
    let answer = read_field(lines, &format!("{question} (y/t): ")).await?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("ya"))
}

fn print_table(app: &App) {
    println!("{}", app.render_table());
}

fn print_toast(app: &App) {
    if let Some(toast) = app.notifier.current(Instant::now()) {
        let tag = match toast.kind {
            ToastKind::Success => "OK",
            ToastKind::Danger => "GAGAL",
        };
        println!("[{tag}] {}", toast.message);
    }
}

async fn new_machine(app: &mut App, lines: &mut InputLines) -> Result<()> {
    app.new_machine.open();
    app.new_machine.id_msn = read_field(lines, "Id Msn: ").await?;
    app.new_machine.alamat = read_field(lines, "Alamat: ").await?;
    app.new_machine.pengelola = read_field(lines, "Pengelola: ").await?;
    app.new_machine.teknisi = read_field(lines, "Teknisi: ").await?;
    app.save_new_machine().await;
    print_table(app);
    Ok(())
}

async fn edit_machine(app: &mut App, lines: &mut InputLines) -> Result<()> {
    app.edit_machine.open();
    app.edit_machine.id_msn = read_field(lines, "Id Msn: ").await?;
    // The blur-event analog: fetch and pre-fill before editing continues
    app.autofill_edit().await;

    let alamat = app.edit_machine.alamat.clone();
    let pengelola = app.edit_machine.pengelola.clone();
    let teknisi = app.edit_machine.teknisi.clone();
    app.edit_machine.alamat = read_field_with_default(lines, "Alamat", &alamat).await?;
    app.edit_machine.pengelola = read_field_with_default(lines, "Pengelola", &pengelola).await?;
    app.edit_machine.teknisi = read_field_with_default(lines, "Teknisi", &teknisi).await?;
    app.save_edit_machine().await;
    print_table(app);
    Ok(())
}

async fn update_pm(app: &mut App, lines: &mut InputLines) -> Result<()> {
    app.update_pm.open();
    println!("{}", render_options(&app.update_pm_options()));
    let selected = read_field(lines, "Id Msn: ").await?;
    app.update_pm.select(&selected, &app.store);
    if !app.update_pm.alamat.is_empty() {
        println!(
            "  {} | {} | {}",
            app.update_pm.alamat, app.update_pm.pengelola, app.update_pm.teknisi
        );
    }
    app.update_pm.periode_pm = read_field(lines, "Periode PM: ").await?;
    app.save_update_pm().await;
    print_table(app);
    Ok(())
}

async fn complete_pm(app: &mut App, lines: &mut InputLines) -> Result<()> {
    app.complete_pm.open();
    println!("{}", render_options(&app.complete_pm_options()));
    let selected = read_field(lines, "Id Msn: ").await?;
    app.complete_pm.select(&selected, &app.store);
    if !app.complete_pm.periode_pm.is_empty() {
        println!(
            "  Periode PM: {} | Teknisi: {}",
            app.complete_pm.periode_pm, app.complete_pm.teknisi
        );
    }
    let default_date = app.complete_pm.tgl_selesai_pm.clone();
    app.complete_pm.tgl_selesai_pm =
        read_field_with_default(lines, "Tanggal Selesai PM", &default_date).await?;
    app.save_complete_pm().await;
    print_table(app);
    Ok(())
}

async fn notes(app: &mut App, lines: &mut InputLines, argument: &str) -> Result<()> {
    let id_msn = if argument.is_empty() {
        read_field(lines, "Id Msn: ").await?
    } else {
        argument.to_string()
    };
    app.open_notes(&id_msn);
    if !app.notes.is_open() {
        return Ok(());
    }
    println!("Notes saat ini: {}", app.notes.notes);
    app.notes.notes = read_field(lines, "Notes baru: ").await?;
    app.save_notes().await;
    print_table(app);
    Ok(())
}

async fn destructive(
    app: &mut App,
    lines: &mut InputLines,
    action: DestructiveAction,
) -> Result<()> {
    app.begin_delete(action);
    let Some(target_prompt) = app.confirmation.prompt() else {
        return Ok(());
    };
    let target = read_field(lines, &format!("{target_prompt} ")).await?;
    app.provide_delete_target(&target);

    let Some(question) = app.confirmation.prompt() else {
        // Empty target declined the flow
        return Ok(());
    };
    if read_yes(lines, &question).await? {
        app.confirm_delete().await;
        print_table(app);
    } else {
        app.cancel_delete();
    }
    Ok(())
}

async fn import(app: &mut App, lines: &mut InputLines, argument: &str) -> Result<()> {
    app.import.open();
    let path = if argument.is_empty() {
        read_field(lines, "File: ").await?
    } else {
        argument.to_string()
    };
    if !path.is_empty() {
        app.import.file = Some(PathBuf::from(path));
    }
    app.run_import().await;
    print_table(app);
    Ok(())
}

async fn export(app: &mut App, lines: &mut InputLines) -> Result<()> {
    if read_yes(lines, "Apakah Anda yakin ingin mengexport data ke PDF?").await? {
        app.export_pdf().await;
    }
    Ok(())
}

/// Runs the interactive loop until EOF or `quit`.
pub async fn run_console(app: &mut App) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP_TEXT}");
    println!();
    app.reload().await;
    print_table(app);
    print_toast(app);

    loop {
        println!();
        let Some(line) = prompt(&mut lines, "> ").await? else {
            break;
        };
        let mut parts = line.splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "" => continue,
            "help" => println!("{HELP_TEXT}"),
            "quit" | "exit" => break,
            "list" => {
                app.reload().await;
                print_table(app);
            }
            "search" => {
                app.search(argument).await;
                print_table(app);
            }
            "new" => new_machine(app, &mut lines).await?,
            "edit" => edit_machine(app, &mut lines).await?,
            "update-pm" => update_pm(app, &mut lines).await?,
            "complete-pm" => complete_pm(app, &mut lines).await?,
            "notes" => notes(app, &mut lines, argument).await?,
            "delete-pm" => destructive(app, &mut lines, DestructiveAction::DeletePm).await?,
            "delete-all" => destructive(app, &mut lines, DestructiveAction::DeleteAll).await?,
            "import" => import(app, &mut lines, argument).await?,
            "export" => export(app, &mut lines).await?,
            unknown => println!("Perintah tidak dikenal: {unknown} (ketik 'help')"),
        }
        print_toast(app);
    }

    Ok(())
}
