use crate::db::connection::Database;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod auth;
mod db;
mod domain;
mod errors;
mod notify;
mod reports;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let db = Database::new("barangay.sqlite3");

    // Schema plus the sample records the portal ships with.
    if let Err(e) = router::prepare_database(&db, "sql/schema.sql") {
        eprintln!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = "127.0.0.1:3000".parse().expect("static addr");
    println!("Barangay portal listening at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
