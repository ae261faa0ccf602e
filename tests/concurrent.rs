use palaver::{ConcurrentSocialNetwork, Profile, Result};
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const NUM_THREADS: usize = 8;
const OPERATIONS_PER_THREAD: usize = 100;

fn profile() -> Profile {
    Profile {
        display_name: "Someone".into(),
        credential: "pw".into(),
        date_of_birth: "1999-12-31".into(),
        affiliation: "Tech Institute".into(),
        address: "42 Elm St".into(),
    }
}

#[test]
fn concurrent_publishing_yields_unique_monotonic_ids() -> Result<()> {
    let net = ConcurrentSocialNetwork::new();
    let mut authors = Vec::new();
    for t in 0..NUM_THREADS {
        authors.push(net.register(format!("author{t}"), profile())?);
    }

    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for &author in &authors {
        let net = net.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || -> Result<Vec<u64>> {
            barrier.wait();

            let mut ids = Vec::new();
            for i in 0..OPERATIONS_PER_THREAD {
                ids.push(net.publish(author, format!("post {i}"))?);
            }
            Ok(ids)
        }));
    }

    let mut all_ids = Vec::new();
    for handle in handles {
        let ids = handle.join().unwrap()?;
        // Each thread saw its own ids in increasing order.
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        all_ids.extend(ids);
    }

    let expected = NUM_THREADS * OPERATIONS_PER_THREAD;
    assert_eq!(all_ids.len(), expected);
    let unique: HashSet<u64> = all_ids.iter().copied().collect();
    assert_eq!(unique.len(), expected);
    assert_eq!(all_ids.iter().copied().max(), Some(expected as u64));
    Ok(())
}

#[test]
fn concurrent_likes_all_count() -> Result<()> {
    let net = ConcurrentSocialNetwork::new();
    let owner = net.register("owner", profile())?;
    let post = net.publish(owner, "pile on")?;

    let mut likers = Vec::new();
    for t in 0..NUM_THREADS {
        likers.push(net.register(format!("liker{t}"), profile())?);
    }

    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for &liker in &likers {
        let net = net.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || -> Result<()> {
            barrier.wait();
            for _ in 0..OPERATIONS_PER_THREAD {
                net.like(post, liker)?;
            }
            Ok(())
        }));
    }

    for handle in handles {
        handle.join().unwrap()?;
    }

    let expected = (NUM_THREADS * OPERATIONS_PER_THREAD) as u64;
    assert_eq!(net.post(post)?.likes, expected);
    assert_eq!(net.unread_notifications(owner)?, expected as usize);
    Ok(())
}

#[test]
fn concurrent_requests_to_one_user_all_land() -> Result<()> {
    let net = ConcurrentSocialNetwork::new();
    let hub = net.register("hub", profile())?;

    let mut senders = Vec::new();
    for t in 0..NUM_THREADS {
        senders.push(net.register(format!("sender{t}"), profile())?);
    }

    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for &sender in &senders {
        let net = net.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || -> Result<()> {
            barrier.wait();
            for _ in 0..10 {
                net.send_friend_request(sender, "hub")?;
            }
            Ok(())
        }));
    }

    for handle in handles {
        handle.join().unwrap()?;
    }

    assert_eq!(net.pending_requests(hub)?.len(), NUM_THREADS * 10);
    Ok(())
}

#[test]
fn accepts_interleaved_with_requests_stay_symmetric() -> Result<()> {
    let net = ConcurrentSocialNetwork::new();
    let hub = net.register("hub", profile())?;

    let mut peers = Vec::new();
    for t in 0..NUM_THREADS {
        let name = format!("peer{t}");
        let id = net.register(name.clone(), profile())?;
        net.send_friend_request(id, "hub")?;
        peers.push(name);
    }

    let barrier = Arc::new(Barrier::new(NUM_THREADS + 1));
    let mut handles = vec![];

    // One thread accepts while the others keep sending fresh requests.
    {
        let net = net.clone();
        let barrier = Arc::clone(&barrier);
        let peers = peers.clone();
        handles.push(thread::spawn(move || -> Result<()> {
            barrier.wait();
            for name in &peers {
                net.accept_friend_request(hub, name)?;
            }
            Ok(())
        }));
    }

    for t in 0..NUM_THREADS {
        let net = net.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || -> Result<()> {
            let sender = net.lookup(&format!("peer{t}"))?;
            barrier.wait();
            for _ in 0..10 {
                net.send_friend_request(sender, "hub")?;
            }
            Ok(())
        }));
    }

    for handle in handles {
        handle.join().unwrap()?;
    }

    // Every accepted friendship is mutual.
    let friends = net.friends_of(hub)?;
    assert_eq!(friends.len(), NUM_THREADS);
    for friend in friends {
        assert_eq!(net.friends_of(friend)?, [hub]);
    }
    Ok(())
}
