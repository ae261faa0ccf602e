use palaver::{Profile, SocialError, SocialNetwork};

fn profile() -> Profile {
    Profile {
        display_name: "Someone".into(),
        credential: "pw".into(),
        date_of_birth: "1999-12-31".into(),
        affiliation: "Tech Institute".into(),
        address: "42 Elm St".into(),
    }
}

fn befriend(net: &mut SocialNetwork, a: u64, b_name: &str) {
    let a_name = net.username(a).expect("name").to_string();
    let b = net.lookup(b_name).expect("lookup");
    net.send_friend_request(a, b_name).expect("request");
    net.accept_friend_request(b, &a_name).expect("accept");
}

#[test]
fn ids_are_unique_across_authors() {
    let mut net = SocialNetwork::new();
    let alice = net.register("alice", profile()).expect("register alice");
    let bob = net.register("bob", profile()).expect("register bob");

    let mut ids = Vec::new();
    for round in 0..10 {
        ids.push(net.publish(alice, format!("a{round}")).expect("publish"));
        ids.push(net.publish(bob, format!("b{round}")).expect("publish"));
    }

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[test]
fn all_posts_walks_users_in_registration_order() {
    let mut net = SocialNetwork::new();
    let alice = net.register("alice", profile()).expect("register alice");
    let bob = net.register("bob", profile()).expect("register bob");

    net.publish(bob, "bob first").expect("publish");
    net.publish(alice, "alice first").expect("publish");
    net.publish(alice, "alice second").expect("publish");

    let listing: Vec<(String, String)> = net
        .all_posts()
        .map(|(author, post)| (author.to_string(), post.content.clone()))
        .collect();

    assert_eq!(
        listing,
        [
            ("alice".to_string(), "alice first".to_string()),
            ("alice".to_string(), "alice second".to_string()),
            ("bob".to_string(), "bob first".to_string()),
        ]
    );
}

#[test]
fn like_and_comment_notify_the_owner() {
    let mut net = SocialNetwork::new();
    let alice = net.register("alice", profile()).expect("register alice");
    let bob = net.register("bob", profile()).expect("register bob");

    let post = net.publish(alice, "hello").expect("publish");
    net.like(post, bob).expect("like");
    net.comment(post, bob, "nice one").expect("comment");

    let drained = net.drain_notifications(alice).expect("drain");
    let messages: Vec<&str> = drained.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            format!("bob liked your post (ID: {post})").as_str(),
            "bob commented on your post.",
        ]
    );

    let stored = net.post(post).expect("post");
    assert_eq!(stored.likes, 1);
    assert_eq!(stored.comments, ["nice one"]);
}

#[test]
fn delete_notifies_every_current_friend() {
    let mut net = SocialNetwork::new();
    let alice = net.register("alice", profile()).expect("register alice");
    net.register("bob", profile()).expect("register bob");
    net.register("carol", profile()).expect("register carol");
    befriend(&mut net, alice, "bob");
    befriend(&mut net, alice, "carol");

    let post = net.publish(alice, "soon gone").expect("publish");
    let bob = net.lookup("bob").expect("lookup bob");
    let carol = net.lookup("carol").expect("lookup carol");
    net.drain_notifications(bob).expect("clear bob");
    net.drain_notifications(carol).expect("clear carol");

    net.delete_post(alice, post).expect("delete");

    // Neither friend interacted with the post; both hear about it anyway.
    for friend in [bob, carol] {
        let drained = net.drain_notifications(friend).expect("drain");
        assert_eq!(drained.len(), 1);
        assert_eq!(
            drained[0].message,
            "alice deleted a post you interacted with."
        );
    }
}

#[test]
fn delete_leaves_other_posts_in_place() {
    let mut net = SocialNetwork::new();
    let alice = net.register("alice", profile()).expect("register alice");

    let first = net.publish(alice, "keep me").expect("publish first");
    let second = net.publish(alice, "drop me").expect("publish second");
    net.delete_post(alice, second).expect("delete");

    let posts = net.posts_of(alice).expect("posts");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, first);
    assert!(matches!(
        net.post(second),
        Err(SocialError::PostNotFound(id)) if id == second
    ));
}
