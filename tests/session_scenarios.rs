//! End-to-end session tests against a scripted server on a loopback
//! socket: registration burst, keepalive, greetings, trigger reply,
//! audit trail, and fatal framing.

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_util::codec::Framed;

use octetbot::{AuditLog, Config, LineCodec, ProtocolError, Session, Transport};

fn test_config(port: u16, audit_log: &std::path::Path) -> Config {
    Config {
        server: "127.0.0.1".to_string(),
        port,
        nick: "octetbot".to_string(),
        channels: vec!["#test".to_string()],
        audit_log: audit_log.to_string_lossy().into_owned(),
    }
}

#[tokio::test]
async fn full_session_scenario() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut framed = Framed::new(stream, LineCodec::new());

        // Registration burst, in order.
        assert_eq!(framed.next().await.unwrap().unwrap(), "NICK octetbot");
        assert_eq!(
            framed.next().await.unwrap().unwrap(),
            "USER octetbot 0 * :octetbot"
        );
        assert_eq!(framed.next().await.unwrap().unwrap(), "JOIN #test");

        // Keepalive challenge gets the token echoed back.
        framed.send("PING :server.example".to_string()).await.unwrap();
        assert_eq!(
            framed.next().await.unwrap().unwrap(),
            "PONG server.example"
        );

        // Arrivals are greeted on the home channel.
        framed
            .send(":alice!a@host JOIN #test".to_string())
            .await
            .unwrap();
        assert_eq!(
            framed.next().await.unwrap().unwrap(),
            "PRIVMSG #test :alice has joined."
        );

        // The trigger token summons a canned reply addressed to the sender.
        framed
            .send(":bob!b@host PRIVMSG #test :!octetbot".to_string())
            .await
            .unwrap();
        assert_eq!(
            framed.next().await.unwrap().unwrap(),
            "PRIVMSG #test :bob: at your service."
        );

        // An unrecognized line produces no reply; the farewell to the
        // following QUIT proves the bot silently skipped it.
        framed
            .send(":server.example 001 octetbot :Welcome".to_string())
            .await
            .unwrap();
        framed
            .send(":carol!c@host QUIT :bye".to_string())
            .await
            .unwrap();
        assert_eq!(
            framed.next().await.unwrap().unwrap(),
            "PRIVMSG #test :carol has left."
        );

        // Dropping the stream closes the connection.
    });

    let dir = tempfile::tempdir().unwrap();
    let audit_path = dir.path().join("audit.log");
    let config = test_config(addr.port(), &audit_path);

    let transport = Transport::connect(&config.server, config.port).await.unwrap();
    let audit = AuditLog::open(&audit_path).unwrap();

    let err = Session::new(&config, transport, audit)
        .run()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::ConnectionClosed | ProtocolError::Io(_)
    ));

    server.await.unwrap();

    let content = std::fs::read_to_string(&audit_path).unwrap();
    assert!(content.contains("* <server> keepalive server.example"));
    assert!(content.contains("#test <alice> has joined."));
    assert!(content.contains("#test <bob> !octetbot"));
    assert!(content.contains("#test <carol> has left."));
    // The unrecognized 001 line left no trace.
    assert!(!content.contains("Welcome"));
}

#[tokio::test]
async fn unterminated_oversize_line_is_fatal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        // 600 bytes and no terminator anywhere: a framing violation,
        // not a line to truncate.
        stream.write_all(&vec![b'x'; 600]).await.unwrap();
        stream.flush().await.unwrap();

        // Drain until the client gives up and drops the connection.
        let mut buf = [0u8; 1024];
        while stream.read(&mut buf).await.unwrap() > 0 {}
    });

    let dir = tempfile::tempdir().unwrap();
    let audit_path = dir.path().join("audit.log");
    let config = test_config(addr.port(), &audit_path);

    let transport = Transport::connect(&config.server, config.port).await.unwrap();
    let audit = AuditLog::open(&audit_path).unwrap();

    let err = Session::new(&config, transport, audit)
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, ProtocolError::LineOverflow { .. }));

    server.await.unwrap();
}
